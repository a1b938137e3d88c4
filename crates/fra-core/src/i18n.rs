//! Interface languages and the translation catalog
//!
//! Lookup order is: requested language, then English, then the key itself.
//! Bengali, Odia and Telugu are selectable but carry no entries yet, so they
//! render in English.

use crate::error::CoreError;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// A selectable interface language
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    /// English
    #[default]
    #[serde(rename = "en")]
    English,
    /// Hindi
    #[serde(rename = "hi")]
    Hindi,
    /// Bengali
    #[serde(rename = "bn")]
    Bengali,
    /// Odia
    #[serde(rename = "or")]
    Odia,
    /// Telugu
    #[serde(rename = "te")]
    Telugu,
}

impl Language {
    /// Languages in selector order
    pub const ALL: [Language; 5] = [
        Language::English,
        Language::Hindi,
        Language::Bengali,
        Language::Odia,
        Language::Telugu,
    ];

    /// ISO 639-1 code
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Hindi => "hi",
            Self::Bengali => "bn",
            Self::Odia => "or",
            Self::Telugu => "te",
        }
    }

    /// English name, as used in the "Switch to" shortcut
    #[must_use]
    pub fn english_name(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Hindi => "Hindi",
            Self::Bengali => "Bengali",
            Self::Odia => "Odia",
            Self::Telugu => "Telugu",
        }
    }

    /// Name of the language in its own script
    #[must_use]
    pub fn native_name(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Hindi => "हिंदी",
            Self::Bengali => "বাংলা",
            Self::Odia => "ଓଡିଆ",
            Self::Telugu => "తెలుగు",
        }
    }

    /// Translate `key` into this language
    #[must_use]
    pub fn t<'a>(self, key: &'a str) -> &'a str {
        translate(self, key)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|l| l.code() == lower)
            .ok_or_else(|| CoreError::UnknownLanguage(s.to_string()))
    }
}

type Table = HashMap<&'static str, &'static str>;

const EN: &[(&str, &str)] = &[
    // page titles
    ("overview_title", "Project Overview"),
    ("fra_atlas_title", "Forest Rights Act (FRA) Atlas"),
    ("data_management_title", "Legacy Data Management"),
    ("asset_mapping_title", "AI-Powered Asset Mapping"),
    ("dss_title", "Decision Support System (DSS)"),
    ("community_title", "Community Engagement Hub"),
    ("settings_title", "System Settings"),
    ("app_title", "FRA Atlas & DSS"),
    // navigation
    ("overview", "Overview"),
    ("fra_atlas", "FRA Atlas"),
    ("data_management", "Data Management"),
    ("asset_mapping", "Asset Mapping"),
    ("dss", "Decision Support"),
    ("community", "Community Engagement"),
    ("settings", "Settings"),
    // stat cards
    ("digitized_records", "Digitized FRA Records"),
    ("villages_mapped", "Villages Mapped"),
    ("assets_identified", "Assets Identified"),
    ("grievances_logged", "Grievances Logged"),
    ("this_month", "this month"),
    // records and DSS
    ("upload_docs", "Upload Documents"),
    ("filter_by_state", "Filter by State"),
    ("filter_by_status", "Filter by Status"),
    ("all", "All"),
    ("claim_id", "Claim ID"),
    ("holder", "Patta Holder"),
    ("village_district", "Village, District"),
    ("state", "State"),
    ("status", "Status"),
    ("actions", "Actions"),
    ("gen_summary", "Generate Summary"),
    ("no_records_match", "No records match the current filters."),
    ("ai_summary_for", "AI Summary for"),
    ("dss_engine_title", "Scheme Recommendation Engine"),
    (
        "dss_engine_desc",
        "Layer Central Sector Schemes (CSS) benefits for FRA patta holders based on mapped data and eligibility criteria.",
    ),
    ("find_recommendations", "Find Recommendations"),
    ("results", "Results:"),
    ("village", "Village"),
    ("issue", "Issue"),
    ("recommended_schemes", "Recommended Schemes"),
    ("gen_strategy_report", "Generate Strategy Report"),
    ("generating_report", "Generating..."),
    ("ai_strategy", "AI-Generated Intervention Strategy:"),
    // atlas
    ("filters_layers", "Filters & Layers"),
    ("map_layers", "Map Layers"),
    ("village_boundaries", "Village Boundaries"),
    ("ifr_claims", "IFR Claims"),
    ("cfr_claims", "CFR Claims"),
    ("land_use", "Land Use Classification"),
    ("water_bodies", "Water Bodies"),
    ("switch_to_lang", "Switch to"),
    ("field_reports", "Field Reports (Mobile)"),
    ("advanced_ai_layers", "Advanced AI Layers"),
    ("potential_claims", "Potential CFR Claims"),
    ("change_detection", "Change Detection"),
    ("timeline_control", "Timeline Control for Change Detection"),
    ("start_date", "Start Date"),
    ("end_date", "End Date"),
    ("view_mode", "View Mode"),
    ("no_fra_data", "No FRA Data Available"),
    // community
    ("grievance_tracker", "Grievance Redressal Tracker"),
    ("recent_meetings", "Recent Gram Sabha Meetings"),
    ("community_feedback", "Community Feedback"),
    // general
    ("generating", "Generating with Gemini..."),
    ("language", "Language"),
    ("loading", "Loading..."),
    // schemes
    ("jjm", "Jal Jeevan Mission"),
    (
        "jjm_desc",
        "Aims to provide safe and adequate drinking water through individual household tap connections by 2024 to all households in rural India.",
    ),
    ("mgnrega", "MGNREGA"),
    (
        "mgnrega_desc",
        "Aims to enhance livelihood security in rural areas by providing at least 100 days of guaranteed wage employment in a financial year to every household whose adult members volunteer to do unskilled manual work.",
    ),
    ("pmkisan", "PM-KISAN"),
    (
        "pmkisan_desc",
        "An income support scheme for all landholding farmer families to supplement their financial needs for procuring various inputs related to agriculture and allied activities.",
    ),
    ("pmksy", "PMKSY (Per Drop More Crop)"),
    (
        "pmksy_desc",
        "Aims to enhance water use efficiency at the farm level through micro-irrigation technologies.",
    ),
    ("nfsm", "National Food Security Mission"),
    (
        "nfsm_desc",
        "Aims to increase the production of rice, wheat, pulses, and coarse cereals through area expansion and productivity enhancement.",
    ),
    ("vandhan", "Van Dhan Vikas Karyakram"),
    (
        "vandhan_desc",
        "An initiative for providing skill upgradation and setting up of primary processing and value addition facilities for tribal communities.",
    ),
    ("pmgsy", "PM Gram Sadak Yojana"),
    (
        "pmgsy_desc",
        "Aims to provide good all-weather road connectivity to unconnected villages.",
    ),
    ("ssa", "Samagra Shiksha Abhiyan"),
    (
        "ssa_desc",
        "An integrated scheme for school education extending from pre-school to class 12 to ensure inclusive and equitable quality education.",
    ),
    ("emrs", "Eklavya Model Residential Schools"),
    (
        "emrs_desc",
        "Aims to provide quality middle and high-level education to Scheduled Tribe (ST) students in remote areas.",
    ),
];

const HI: &[(&str, &str)] = &[
    ("overview_title", "परियोजना अवलोकन"),
    ("fra_atlas_title", "वन अधिकार अधिनियम (FRA) एटलस"),
    ("data_management_title", "विरासत डेटा प्रबंधन"),
    ("asset_mapping_title", "एआई-संचालित संपत्ति मैपिंग"),
    ("dss_title", "निर्णय समर्थन प्रणाली (DSS)"),
    ("community_title", "सामुदायिक सहभागिता केंद्र"),
    ("settings_title", "सिस्टम सेटिंग्स"),
    ("app_title", "FRA एटलस और DSS"),
    ("overview", "अवलोकन"),
    ("fra_atlas", "FRA एटलस"),
    ("data_management", "डेटा प्रबंधन"),
    ("asset_mapping", "एसेट मैपिंग"),
    ("dss", "निर्णय समर्थन"),
    ("community", "सामुदायिक जुड़ाव"),
    ("settings", "सेटिंग्स"),
    ("digitized_records", "डिजिटल FRA रिकॉर्ड्स"),
    ("villages_mapped", "मैप किए गए गांव"),
    ("assets_identified", "पहचाने गए संपत्ति"),
    ("grievances_logged", "दर्ज शिकायतें"),
    ("this_month", "इस महीने"),
    ("upload_docs", "दस्तावेज़ अपलोड करें"),
    ("filter_by_state", "राज्य द्वारा फ़िल्टर करें"),
    ("filter_by_status", "स्थिति द्वारा फ़िल्टर करें"),
    ("all", "सभी"),
    ("claim_id", "दावा आईडी"),
    ("holder", "पट्टा धारक"),
    ("village_district", "गांव, जिला"),
    ("state", "राज्य"),
    ("status", "स्थिति"),
    ("actions", "कार्रवाइयाँ"),
    ("gen_summary", "सारांश उत्पन्न करें"),
    ("no_records_match", "वर्तमान फ़िल्टर से कोई रिकॉर्ड मेल नहीं खाता।"),
    ("ai_summary_for", "के लिए AI सारांश"),
    ("dss_engine_title", "योजना अनुशंसा इंजन"),
    (
        "dss_engine_desc",
        "मैप किए गए डेटा और पात्रता मानदंडों के आधार पर FRA पट्टा धारकों के लिए केंद्रीय क्षेत्र की योजनाओं (CSS) के लाभों को परत करें।",
    ),
    ("find_recommendations", "सिफारिशें खोजें"),
    ("results", "परिणाम:"),
    ("village", "गाँव"),
    ("issue", "मुद्दा"),
    ("recommended_schemes", "अनुशंसित योजनाएं"),
    ("gen_strategy_report", "रणनीति रिपोर्ट तैयार करें"),
    ("generating_report", "उत्पन्न हो रहा है..."),
    ("ai_strategy", "एआई-जनित हस्तक्षेप रणनीति:"),
    ("filters_layers", "फ़िल्टर और परतें"),
    ("map_layers", "मानचित्र परतें"),
    ("village_boundaries", "ग्राम सीमाएँ"),
    ("ifr_claims", "IFR दावे"),
    ("cfr_claims", "CFR दावे"),
    ("land_use", "भूमि उपयोग वर्गीकरण"),
    ("water_bodies", "जलाशय"),
    ("grievance_tracker", "शिकायत निवारण ट्रैकर"),
    ("recent_meetings", "हाल की ग्राम सभा बैठकें"),
    ("community_feedback", "सामुदायिक प्रतिक्रिया"),
    ("generating", "जेमिनी के साथ उत्पन्न हो रहा है..."),
    ("language", "भाषा"),
    ("loading", "लोड हो रहा है..."),
    ("switch_to_lang", "पर स्विच करें"),
    ("jjm", "जल जीवन मिशन"),
    (
        "jjm_desc",
        "ग्रामीण भारत के सभी घरों में 2024 तक व्यक्तिगत घरेलू नल कनेक्शन के माध्यम से सुरक्षित और पर्याप्त पेयजल उपलब्ध कराने का लक्ष्य है।",
    ),
    ("mgnrega", "मनरेगा"),
    (
        "mgnrega_desc",
        "ग्रामीण क्षेत्रों में हर उस घर को एक वित्तीय वर्ष में कम से कम 100 दिनों का गारंटीकृत मजदारी रोजगार प्रदान करके आजीविका सुरक्षा बढ़ाने का लक्ष्य है, जिसके वयस्क सदस्य अकुशल शारीरिक काम करने के लिए स्वेच्छा से काम करते हैं।",
    ),
    ("pmkisan", "पीएम-किसान"),
    (
        "pmkisan_desc",
        "देश के सभी भूमिधारक किसान परिवारों के लिए एक आय सहायता योजना है ताकि कृषि और संबद्ध गतिविधियों के साथ-साथ घरेलू जरूरतों से संबंधित विभिन्न आदानों की खरीद के लिए उनकी वित्तीय जरूरतों को पूरा किया जा सके।",
    ),
];

static CATALOG: Lazy<HashMap<Language, Table>> = Lazy::new(|| {
    let mut catalog = HashMap::new();
    catalog.insert(Language::English, EN.iter().copied().collect());
    catalog.insert(Language::Hindi, HI.iter().copied().collect());
    for lang in [Language::Bengali, Language::Odia, Language::Telugu] {
        catalog.insert(lang, Table::new());
    }
    catalog
});

/// Look up `key` with fallback to English and then to the key itself
#[must_use]
pub fn translate<'a>(lang: Language, key: &'a str) -> &'a str {
    lookup(lang, key)
        .or_else(|| lookup(Language::English, key))
        .unwrap_or(key)
}

fn lookup(lang: Language, key: &str) -> Option<&'static str> {
    CATALOG.get(&lang).and_then(|table| table.get(key)).copied()
}

/// Whether the language table has an entry of its own for `key`
#[must_use]
pub fn has_entry(lang: Language, key: &str) -> bool {
    lookup(lang, key).is_some()
}

/// The full merged table for a language, English filling any gaps
#[must_use]
pub fn table(lang: Language) -> HashMap<&'static str, &'static str> {
    EN.iter()
        .map(|&(k, v)| (k, lookup(lang, k).unwrap_or(v)))
        .collect()
}
