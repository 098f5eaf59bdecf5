//! # Static UI Text
//!
//! Hard-coded string tables for each [`Language`]. There is no translation
//! machinery here: every piece of on-screen copy is looked up by language.

use crate::core::language::Language;

/// Onboarding content shown while the conversation is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WelcomeContent {
    pub greeting: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub features: [&'static str; 3],
    pub prompt: &'static str,
}

static WELCOME_EN: WelcomeContent = WelcomeContent {
    greeting: "Namaste! 🙏",
    title: "Welcome to Sahaayak",
    subtitle: "Your personal guide to scholarships and opportunities in Maharashtra",
    features: [
        "Find scholarships matching your profile",
        "Get help with application process",
        "Track deadlines and requirements",
    ],
    prompt: "How can I help you today?",
};

static WELCOME_HI: WelcomeContent = WelcomeContent {
    greeting: "नमस्ते! 🙏",
    title: "सहायक में आपका स्वागत है",
    subtitle: "महाराष्ट्र में छात्रवृत्ति और अवसरों के लिए आपका व्यक्तिगत मार्गदर्शक",
    features: [
        "अपनी प्रोफ़ाइल से मेल खाती छात्रवृत्ति खोजें",
        "आवेदन प्रक्रिया में मदद पाएं",
        "समय सीमा और आवश्यकताओं को ट्रैक करें",
    ],
    prompt: "आज मैं आपकी कैसे मदद कर सकता हूं?",
};

static WELCOME_MR: WelcomeContent = WelcomeContent {
    greeting: "नमस्कार! 🙏",
    title: "सहायक मध्ये आपले स्वागत आहे",
    subtitle: "महाराष्ट्रातील शिष्यवृत्ती आणि संधींसाठी तुमचा वैयक्तिक मार्गदर्शक",
    features: [
        "तुमच्या प्रोफाइलशी जुळणाऱ्या शिष्यवृत्ती शोधा",
        "अर्ज प्रक्रियेत मदत मिळवा",
        "अंतिम मुदत आणि आवश्यकता ट्रॅक करा",
    ],
    prompt: "आज मी तुम्हाला कशी मदत करू शकतो?",
};

static QUICK_ACTIONS_EN: [&str; 5] = [
    "Find scholarships for me",
    "SC/ST/OBC schemes",
    "How to apply?",
    "Documents needed",
    "Check eligibility",
];

static QUICK_ACTIONS_HI: [&str; 5] = [
    "मेरे लिए छात्रवृत्ति खोजें",
    "SC/ST/OBC योजनाएं",
    "आवेदन कैसे करें?",
    "आवश्यक दस्तावेज़",
    "पात्रता जांचें",
];

static QUICK_ACTIONS_MR: [&str; 5] = [
    "माझ्यासाठी शिष्यवृत्ती शोधा",
    "SC/ST/OBC योजना",
    "अर्ज कसा करावा?",
    "आवश्यक कागदपत्रे",
    "पात्रता तपासा",
];

/// Brand name, always shown in Latin script.
pub const BRAND: &str = "Sahaayak";

/// Tagline under the brand. Bilingual regardless of the selected language.
pub const TAGLINE: &str = "सहायक • Your Scholarship Guide";

pub fn welcome(language: Language) -> &'static WelcomeContent {
    match language {
        Language::En => &WELCOME_EN,
        Language::Hi => &WELCOME_HI,
        Language::Mr => &WELCOME_MR,
    }
}

pub fn quick_actions(language: Language) -> &'static [&'static str] {
    match language {
        Language::En => &QUICK_ACTIONS_EN,
        Language::Hi => &QUICK_ACTIONS_HI,
        Language::Mr => &QUICK_ACTIONS_MR,
    }
}

pub fn placeholder(language: Language) -> &'static str {
    match language {
        Language::En => "Ask about scholarships, eligibility, documents...",
        Language::Hi => "छात्रवृत्ति, पात्रता, दस्तावेज़ों के बारे में पूछें...",
        Language::Mr => "शिष्यवृत्ती, पात्रता, कागदपत्रांबद्दल विचारा...",
    }
}

pub fn typing_label(language: Language) -> &'static str {
    match language {
        Language::En => "Sahaayak is typing",
        Language::Hi => "सहायक लिख रहा है",
        Language::Mr => "सहायक लिहित आहे",
    }
}
