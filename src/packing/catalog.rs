//! Built-in packing lists, one per destination category

use std::sync::LazyLock;

use super::ItemCategory::{Clothing, Gear, Personal, Safety};
use super::{DestinationCategory, ItemCategory, PackingItem, PackingList};

/// name, category, essential, weather dependent, season dependent
type Entry = (&'static str, ItemCategory, bool, bool, bool);

const fn entry(
    name: &'static str,
    category: ItemCategory,
    essential: bool,
) -> Entry {
    (name, category, essential, false, false)
}

const fn weather(
    name: &'static str,
    category: ItemCategory,
    essential: bool,
) -> Entry {
    (name, category, essential, true, false)
}

const fn season(
    name: &'static str,
    category: ItemCategory,
    essential: bool,
) -> Entry {
    (name, category, essential, false, true)
}

const DESERT: &[Entry] = &[
    weather("Lightweight long-sleeve shirts", Clothing, true),
    entry("Long pants (lightweight)", Clothing, true),
    entry("Wide-brimmed hat", Clothing, true),
    entry("Sunglasses", Clothing, true),
    weather("Warm jacket for nights", Clothing, true),
    entry("Comfortable hiking boots", Clothing, true),
    entry("Moisture-wicking underwear", Clothing, true),
    entry("High SPF sunscreen", Gear, true),
    entry("Extra water containers", Gear, true),
    entry("Headlamp with extra batteries", Gear, true),
    weather("Sleeping bag (temperature rated)", Gear, true),
    entry("Tent with sand stakes", Gear, true),
    entry("Portable shade/tarp", Gear, false),
    entry("First aid kit", Safety, true),
    entry("GPS device or compass", Safety, true),
    entry("Emergency whistle", Safety, true),
    entry("Water purification tablets", Safety, false),
    entry("Lip balm with SPF", Personal, true),
    entry("Moisturizer", Personal, true),
    entry("Personal medications", Personal, true),
];

const MOUNTAIN: &[Entry] = &[
    weather("Layered clothing system", Clothing, true),
    weather("Waterproof jacket", Clothing, true),
    season("Insulated jacket", Clothing, true),
    entry("Hiking boots with ankle support", Clothing, true),
    season("Warm hat and gloves", Clothing, true),
    entry("Moisture-wicking base layers", Clothing, true),
    season("Four-season tent", Gear, true),
    weather("Sleeping bag (cold rated)", Gear, true),
    entry("Trekking poles", Gear, false),
    entry("Headlamp with extra batteries", Gear, true),
    entry("Portable stove and fuel", Gear, true),
    entry("First aid kit", Safety, true),
    entry("Emergency shelter", Safety, false),
    season("Avalanche safety gear", Safety, false),
    entry("Sunscreen", Personal, true),
    entry("Personal medications", Personal, true),
];

const FOREST: &[Entry] = &[
    entry("Long pants and long sleeves", Clothing, true),
    weather("Rain gear", Clothing, true),
    entry("Hiking boots", Clothing, true),
    entry("Hat", Clothing, false),
    entry("Insect repellent", Gear, true),
    entry("Three-season tent", Gear, true),
    entry("Sleeping bag", Gear, true),
    entry("Water filter", Gear, false),
    entry("Rope/paracord", Gear, false),
    entry("First aid kit", Safety, true),
    entry("Emergency whistle", Safety, true),
    entry("Bear spray (if applicable)", Safety, false),
    entry("Personal medications", Personal, true),
    entry("Biodegradable soap", Personal, false),
];

const BEACH: &[Entry] = &[
    entry("Swimwear", Clothing, true),
    entry("Quick-dry shorts and shirts", Clothing, true),
    entry("Sun hat", Clothing, true),
    entry("Sandals and water shoes", Clothing, true),
    weather("Light jacket for evenings", Clothing, false),
    entry("High SPF sunscreen", Gear, true),
    entry("Beach tent or umbrella", Gear, false),
    entry("Waterproof bags", Gear, true),
    entry("Snorkeling gear", Gear, false),
    entry("First aid kit", Safety, true),
    entry("Emergency whistle", Safety, true),
    entry("After-sun lotion", Personal, true),
    entry("Personal medications", Personal, true),
];

fn build(region: &str, category: DestinationCategory, entries: &[Entry]) -> PackingList {
    PackingList {
        region: region.to_string(),
        category,
        items: entries
            .iter()
            .map(|&(name, item_category, essential, weather_dependent, season_dependent)| {
                PackingItem {
                    name: name.to_string(),
                    category: item_category,
                    essential,
                    weather_dependent,
                    season_dependent,
                }
            })
            .collect(),
    }
}

pub(super) static BUILTIN_LISTS: LazyLock<Vec<PackingList>> = LazyLock::new(|| {
    vec![
        build("Desert", DestinationCategory::Desert, DESERT),
        build("Mountain", DestinationCategory::Mountain, MOUNTAIN),
        build("Forest", DestinationCategory::Forest, FOREST),
        build("Beach/Coastal", DestinationCategory::Beach, BEACH),
    ]
});
