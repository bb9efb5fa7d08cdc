//! Safety hub: emergency contacts, safety tips, camping regulations and
//! eco tips, each rendered in every supported locale

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::models::LocalizedText;
use crate::packing::DestinationCategory;
use crate::spots::CampingSpot;

/// Contacts registered under this region are reachable everywhere
pub const NATIONAL_REGION: &str = "National";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactType {
    Police,
    Medical,
    Fire,
    Rescue,
    Tourism,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmergencyContact {
    pub id: String,
    pub name: LocalizedText,
    pub phone: String,
    pub region: String,
    #[serde(rename = "type")]
    pub contact_type: ContactType,
    pub available_24h: bool,
}

/// Tip urgency; sorts most urgent first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetyTip {
    pub id: String,
    /// `None` for advice that applies to every destination
    pub category: Option<DestinationCategory>,
    pub title: LocalizedText,
    pub description: LocalizedText,
    pub priority: Priority,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Regulation {
    pub id: String,
    pub title: LocalizedText,
    pub description: LocalizedText,
    /// `None` when the rule applies nationwide
    pub region: Option<String>,
    pub permit_required: bool,
    pub fine: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EcoTip {
    pub id: String,
    pub title: LocalizedText,
    pub description: LocalizedText,
}

/// Everything a camper should read before leaving for one destination
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetyBriefing {
    pub contacts: Vec<EmergencyContact>,
    pub tips: Vec<SafetyTip>,
    pub regulations: Vec<Regulation>,
}

fn contact(
    id: &str,
    name: LocalizedText,
    phone: &str,
    region: &str,
    contact_type: ContactType,
    available_24h: bool,
) -> EmergencyContact {
    EmergencyContact {
        id: id.to_string(),
        name,
        phone: phone.to_string(),
        region: region.to_string(),
        contact_type,
        available_24h,
    }
}

static CONTACTS: LazyLock<Vec<EmergencyContact>> = LazyLock::new(|| {
    vec![
        contact(
            "1",
            LocalizedText::new("National Emergency Services", "Services d'urgence nationaux", "خدمات الطوارئ الوطنية"),
            "197",
            NATIONAL_REGION,
            ContactType::Police,
            true,
        ),
        contact(
            "2",
            LocalizedText::new("Medical Emergency (SAMU)", "Urgences médicales (SAMU)", "الطوارئ الطبية"),
            "190",
            NATIONAL_REGION,
            ContactType::Medical,
            true,
        ),
        contact(
            "3",
            LocalizedText::new("Fire Department", "Protection civile", "الحماية المدنية"),
            "198",
            NATIONAL_REGION,
            ContactType::Fire,
            true,
        ),
        contact(
            "4",
            LocalizedText::new("Tourist Police Tunis", "Police touristique Tunis", "شرطة السياحة تونس"),
            "+216 71 341 077",
            "Tunis",
            ContactType::Tourism,
            false,
        ),
        contact(
            "5",
            LocalizedText::new("Desert Rescue Douz", "Secours désert Douz", "إنقاذ الصحراء دوز"),
            "+216 75 470 351",
            "Douz",
            ContactType::Rescue,
            true,
        ),
        contact(
            "6",
            LocalizedText::new("Mountain Rescue Kasserine", "Secours montagne Kasserine", "إنقاذ الجبال القصرين"),
            "+216 77 474 200",
            "Kasserine",
            ContactType::Rescue,
            true,
        ),
    ]
});

static TIPS: LazyLock<Vec<SafetyTip>> = LazyLock::new(|| {
    vec![
        SafetyTip {
            id: "1".to_string(),
            category: Some(DestinationCategory::Desert),
            title: LocalizedText::new("Desert Camping Safety", "Sécurité camping désert", "سلامة التخييم في الصحراء"),
            description: LocalizedText::new(
                "Always inform someone of your location, carry extra water (4L per person per day), and never camp alone in remote desert areas.",
                "Informez toujours quelqu'un de votre localisation, emportez de l'eau supplémentaire (4L par personne par jour), et ne campez jamais seul dans des zones désertiques isolées.",
                "أبلغ دائماً شخصاً ما عن موقعك، احمل ماءً إضافياً (4 لتر للشخص يومياً)، ولا تخيم وحيداً في المناطق الصحراوية النائية.",
            ),
            priority: Priority::High,
        },
        SafetyTip {
            id: "2".to_string(),
            category: Some(DestinationCategory::Mountain),
            title: LocalizedText::new("Mountain Weather Awareness", "Conscience météo montagne", "الوعي بطقس الجبال"),
            description: LocalizedText::new(
                "Weather can change rapidly in mountains. Check forecasts, pack warm clothes even in summer, and avoid camping on ridges during storms.",
                "Le temps peut changer rapidement en montagne. Vérifiez les prévisions, emportez des vêtements chauds même en été, et évitez de camper sur les crêtes pendant les orages.",
                "يمكن أن يتغير الطقس بسرعة في الجبال. تحقق من التوقعات، احزم ملابس دافئة حتى في الصيف، وتجنب التخييم على القمم أثناء العواصف.",
            ),
            priority: Priority::High,
        },
        SafetyTip {
            id: "3".to_string(),
            category: None,
            title: LocalizedText::new("Wildlife Precautions", "Précautions faune sauvage", "احتياطات الحياة البرية"),
            description: LocalizedText::new(
                "Store food properly, maintain distance from wild animals, and never feed wildlife. Be especially cautious of scorpions and snakes.",
                "Stockez la nourriture correctement, maintenez une distance avec les animaux sauvages, et ne nourrissez jamais la faune. Soyez particulièrement prudent avec les scorpions et serpents.",
                "احفظ الطعام بشكل صحيح، حافظ على المسافة من الحيوانات البرية، ولا تطعم الحياة البرية أبداً. كن حذراً خاصة من العقارب والثعابين.",
            ),
            priority: Priority::Medium,
        },
    ]
});

static REGULATIONS: LazyLock<Vec<Regulation>> = LazyLock::new(|| {
    vec![
        Regulation {
            id: "1".to_string(),
            title: LocalizedText::new("National Park Camping Permits", "Permis camping parcs nationaux", "تصاريح التخييم في المتنزهات الوطنية"),
            description: LocalizedText::new(
                "Camping in national parks requires advance permits. Contact park authorities 48 hours before arrival.",
                "Le camping dans les parcs nationaux nécessite des permis à l'avance. Contactez les autorités du parc 48 heures avant l'arrivée.",
                "يتطلب التخييم في المتنزهات الوطنية تصاريح مسبقة. اتصل بسلطات المتنزه قبل 48 ساعة من الوصول.",
            ),
            region: None,
            permit_required: true,
            fine: Some("200-500 TND".to_string()),
        },
        Regulation {
            id: "2".to_string(),
            title: LocalizedText::new("Fire Restrictions", "Restrictions feu", "قيود النار"),
            description: LocalizedText::new(
                "Open fires prohibited during dry season (June-September). Use designated fire pits only.",
                "Feux ouverts interdits pendant la saison sèche (juin-septembre). Utilisez uniquement les foyers désignés.",
                "النيران المكشوفة محظورة خلال الموسم الجاف (يونيو-سبتمبر). استخدم حفر النار المخصصة فقط.",
            ),
            region: None,
            permit_required: false,
            fine: Some("100-300 TND".to_string()),
        },
        Regulation {
            id: "3".to_string(),
            title: LocalizedText::new("Waste Management", "Gestion des déchets", "إدارة النفايات"),
            description: LocalizedText::new(
                "Pack out all trash. Littering in natural areas carries heavy fines. Use biodegradable soaps only.",
                "Emportez tous les déchets. Jeter des détritus dans les zones naturelles entraîne de lourdes amendes. Utilisez uniquement des savons biodégradables.",
                "احزم جميع القمامة. إلقاء القمامة في المناطق الطبيعية يحمل غرامات ثقيلة. استخدم الصابون القابل للتحلل فقط.",
            ),
            region: None,
            permit_required: false,
            fine: Some("50-200 TND".to_string()),
        },
    ]
});

static ECO_TIPS: LazyLock<Vec<EcoTip>> = LazyLock::new(|| {
    let tip = |id: &str, title, description| EcoTip {
        id: id.to_string(),
        title,
        description,
    };
    vec![
        tip(
            "1",
            LocalizedText::new("Leave No Trace", "Ne laissez aucune trace", "لا تترك أثراً"),
            LocalizedText::new(
                "Pack out everything you bring in. Leave campsites cleaner than you found them.",
                "Emportez tout ce que vous apportez. Laissez les sites de camping plus propres que vous ne les avez trouvés.",
                "احزم كل ما تحضره. اترك مواقع التخييم أنظف مما وجدتها.",
            ),
        ),
        tip(
            "2",
            LocalizedText::new("Water Conservation", "Conservation de l'eau", "حفظ المياه"),
            LocalizedText::new(
                "Use water sparingly, especially in desert regions. Collect rainwater when possible.",
                "Utilisez l'eau avec parcimonie, surtout dans les régions désertiques. Collectez l'eau de pluie quand c'est possible.",
                "استخدم الماء بحذر، خاصة في المناطق الصحراوية. اجمع مياه الأمطار عند الإمكان.",
            ),
        ),
        tip(
            "3",
            LocalizedText::new("Respect Wildlife", "Respectez la faune", "احترم الحياة البرية"),
            LocalizedText::new(
                "Observe animals from distance, never disturb nests or dens, and keep noise levels low.",
                "Observez les animaux à distance, ne dérangez jamais les nids ou tanières, et gardez les niveaux de bruit bas.",
                "راقب الحيوانات من بعيد، لا تزعج الأعشاش أو الجحور أبداً، واحتفظ بمستويات الضوضاء منخفضة.",
            ),
        ),
    ]
});

#[must_use]
pub fn emergency_contacts() -> &'static [EmergencyContact] {
    &CONTACTS
}

/// National contacts followed by those registered for `region`
/// (case-insensitive)
#[must_use]
pub fn contacts_for_region(region: &str) -> Vec<&'static EmergencyContact> {
    let region = region.trim();
    let mut contacts: Vec<&EmergencyContact> = CONTACTS
        .iter()
        .filter(|c| c.region == NATIONAL_REGION)
        .collect();
    contacts.extend(
        CONTACTS
            .iter()
            .filter(|c| c.region != NATIONAL_REGION && c.region.eq_ignore_ascii_case(region)),
    );
    contacts
}

#[must_use]
pub fn safety_tips() -> &'static [SafetyTip] {
    &TIPS
}

/// Tips for a destination category plus the general ones, most urgent first
#[must_use]
pub fn tips_for(category: DestinationCategory) -> Vec<&'static SafetyTip> {
    let mut tips: Vec<&SafetyTip> = TIPS
        .iter()
        .filter(|tip| tip.category.is_none_or(|c| c == category))
        .collect();
    tips.sort_by_key(|tip| tip.priority);
    tips
}

#[must_use]
pub fn regulations() -> &'static [Regulation] {
    &REGULATIONS
}

/// Nationwide rules plus those specific to `region`
#[must_use]
pub fn regulations_for_region(region: &str) -> Vec<&'static Regulation> {
    REGULATIONS
        .iter()
        .filter(|rule| {
            rule.region
                .as_deref()
                .is_none_or(|r| r.eq_ignore_ascii_case(region.trim()))
        })
        .collect()
}

#[must_use]
pub fn eco_tips() -> &'static [EcoTip] {
    &ECO_TIPS
}

/// Contacts, tips and rules that apply to a trip to `spot`
///
/// Local contacts match either the spot's governorate or a town named in
/// the spot's name, so the Douz camp in Kebili gets the Douz desert rescue.
#[must_use]
pub fn briefing(spot: &CampingSpot) -> SafetyBriefing {
    let mut contacts = contacts_for_region(&spot.region);
    contacts.extend(CONTACTS.iter().filter(|c| {
        c.region != NATIONAL_REGION
            && !c.region.eq_ignore_ascii_case(&spot.region)
            && spot.name.contains_ignore_case(&c.region)
    }));

    SafetyBriefing {
        contacts: contacts.into_iter().cloned().collect(),
        tips: tips_for(spot.category).into_iter().cloned().collect(),
        regulations: regulations_for_region(&spot.region)
            .into_iter()
            .cloned()
            .collect(),
    }
}
