//! # Canned Responses
//!
//! The entire "intelligence" of the assistant: a fixed table of replies per
//! language and a random draw over it. The user's text never influences which
//! entry is picked.
//!
//! ```text
//! pool(language)  ──►  [entry 0, entry 1, ...]
//!                              ▲
//!        ReplyPicker::pick ────┘  (uniform, independent draws)
//! ```

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::language::Language;

/// A follow-up button attached to a canned reply.
#[derive(Debug, PartialEq, Eq)]
pub struct ActionTemplate {
    pub id: &'static str,
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct CannedResponse {
    pub content: &'static str,
    pub actions: &'static [ActionTemplate],
}

macro_rules! action {
    ($id:expr, $label:expr, $value:expr) => {
        ActionTemplate { id: $id, label: $label, value: $value }
    };
}

static POOL_EN: [CannedResponse; 3] = [
    CannedResponse {
        content: "I can help you find scholarships! To give you the best recommendations, could you tell me:\n\n• Your current education level (10th/12th/Graduate)\n• Your category (General/SC/ST/OBC/EWS)\n• Your family's annual income\n\nThis will help me find scholarships you're eligible for.",
        actions: &[
            action!("level-12th", "12th pass", "I have passed 12th standard"),
            action!("level-graduate", "Graduate", "I am a graduate student"),
            action!("category-obc", "OBC category", "I belong to the OBC category"),
        ],
    },
    CannedResponse {
        content: "Great question! For most Maharashtra government scholarships, you'll need:\n\n📄 Aadhaar Card\n📄 Income Certificate\n📄 Caste Certificate (if applicable)\n📄 Previous year marksheet\n📄 Bank passbook\n📄 Domicile Certificate\n\nWould you like me to explain how to get any of these documents?",
        actions: &[
            action!("doc-income", "Income certificate", "How do I get an income certificate?"),
            action!("doc-caste", "Caste certificate", "How do I get a caste certificate?"),
            action!("doc-domicile", "Domicile certificate", "How do I get a domicile certificate?"),
        ],
    },
    CannedResponse {
        content: "The Mahatma Jyotiba Phule Scholarship is one of the most popular schemes! Here's what you need to know:\n\n✅ For SC/ST/OBC students\n✅ Family income below ₹8 lakh/year\n✅ Covers tuition fees + maintenance\n\nWould you like me to guide you through the application process?",
        actions: &[
            action!("apply-guide", "Yes, guide me", "Guide me through the application process"),
            action!("apply-eligibility", "Check eligibility", "Check my eligibility for this scholarship"),
        ],
    },
];

static POOL_HI: [CannedResponse; 2] = [
    CannedResponse {
        content: "मैं आपको छात्रवृत्ति खोजने में मदद कर सकता हूं! सर्वोत्तम सिफारिशें देने के लिए, क्या आप मुझे बता सकते हैं:\n\n• आपका वर्तमान शिक्षा स्तर (10वीं/12वीं/स्नातक)\n• आपकी श्रेणी (सामान्य/SC/ST/OBC/EWS)\n• आपके परिवार की वार्षिक आय\n\nइससे मुझे उन छात्रवृत्तियों को खोजने में मदद मिलेगी जिनके लिए आप पात्र हैं।",
        actions: &[
            action!("level-12th", "12वीं पास", "मैंने 12वीं पास की है"),
            action!("level-graduate", "स्नातक", "मैं स्नातक का छात्र हूं"),
            action!("category-obc", "OBC श्रेणी", "मैं OBC श्रेणी से हूं"),
        ],
    },
    CannedResponse {
        content: "बढ़िया सवाल! अधिकांश महाराष्ट्र सरकारी छात्रवृत्तियों के लिए, आपको चाहिए:\n\n📄 आधार कार्ड\n📄 आय प्रमाण पत्र\n📄 जाति प्रमाण पत्र (यदि लागू हो)\n📄 पिछले वर्ष की मार्कशीट\n📄 बैंक पासबुक\n📄 अधिवास प्रमाण पत्र\n\nक्या आप चाहते हैं कि मैं इनमें से कोई दस्तावेज कैसे प्राप्त करें, यह समझाऊं?",
        actions: &[
            action!("doc-income", "आय प्रमाण पत्र", "आय प्रमाण पत्र कैसे प्राप्त करें?"),
            action!("doc-caste", "जाति प्रमाण पत्र", "जाति प्रमाण पत्र कैसे प्राप्त करें?"),
        ],
    },
];

static POOL_MR: [CannedResponse; 2] = [
    CannedResponse {
        content: "मी तुम्हाला शिष्यवृत्ती शोधण्यात मदत करू शकतो! सर्वोत्तम शिफारसी देण्यासाठी, तुम्ही मला सांगू शकता का:\n\n• तुमची सध्याची शिक्षण पातळी (10वी/12वी/पदवी)\n• तुमची श्रेणी (सामान्य/SC/ST/OBC/EWS)\n• तुमच्या कुटुंबाचे वार्षिक उत्पन्न\n\nयामुळे मला तुम्ही पात्र असलेल्या शिष्यवृत्ती शोधण्यात मदत होईल.",
        actions: &[
            action!("level-12th", "12वी उत्तीर्ण", "मी 12वी उत्तीर्ण आहे"),
            action!("level-graduate", "पदवीधर", "मी पदवीचा विद्यार्थी आहे"),
            action!("category-obc", "OBC श्रेणी", "मी OBC श्रेणीतील आहे"),
        ],
    },
    CannedResponse {
        content: "उत्तम प्रश्न! बहुतेक महाराष्ट्र सरकारी शिष्यवृत्तीसाठी, तुम्हाला हे लागेल:\n\n📄 आधार कार्ड\n📄 उत्पन्न प्रमाणपत्र\n📄 जात प्रमाणपत्र (लागू असल्यास)\n📄 मागील वर्षाची मार्कशीट\n📄 बँक पासबुक\n📄 अधिवास प्रमाणपत्र\n\nयापैकी कोणतेही कागदपत्र कसे मिळवायचे हे मी समजावून सांगू का?",
        actions: &[
            action!("doc-income", "उत्पन्न प्रमाणपत्र", "उत्पन्न प्रमाणपत्र कसे मिळवायचे?"),
            action!("doc-caste", "जात प्रमाणपत्र", "जात प्रमाणपत्र कसे मिळवायचे?"),
        ],
    },
];

/// All canned replies for a language, in table order.
pub fn pool(language: Language) -> &'static [CannedResponse] {
    match language {
        Language::En => &POOL_EN,
        Language::Hi => &POOL_HI,
        Language::Mr => &POOL_MR,
    }
}

/// Random source for reply selection.
///
/// Seedable so tests (and `--seed`) get a reproducible sequence of replies.
pub struct ReplyPicker {
    rng: StdRng,
}

impl ReplyPicker {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Draws the index of the next reply. Independent of all previous draws.
    pub fn pick_index(&mut self, language: Language) -> usize {
        self.rng.gen_range(0..pool(language).len())
    }

    pub fn pick(&mut self, language: Language) -> &'static CannedResponse {
        let index = self.pick_index(language);
        &pool(language)[index]
    }
}

impl Default for ReplyPicker {
    fn default() -> Self {
        Self::from_entropy()
    }
}
