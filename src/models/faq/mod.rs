// FAQ module
// Question/answer entries for the guest FAQ section

use serde::{Deserialize, Serialize};

/// One entry in the guest FAQ accordion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

impl FaqEntry {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// The default FAQ list shown to guests
pub fn default_faqs() -> Vec<FaqEntry> {
    vec![
        FaqEntry::new(
            "What time should I arrive?",
            "Please arrive 15 minutes before the ceremony begins at 12:30 PM. This will give you time to find parking and get seated comfortably.",
        ),
        FaqEntry::new(
            "What is the dress code?",
            "We're asking for cocktail attire. Think dressy but not overly formal - suits for men and cocktail dresses for women. Please avoid white, ivory, or anything too similar to the bride's dress.",
        ),
        FaqEntry::new(
            "Will the ceremony be outdoors?",
            "The ceremony will be held outdoors in the garden, weather permitting. We have a beautiful indoor backup location in case of rain.",
        ),
        FaqEntry::new(
            "Are children welcome?",
            "We love your little ones, but we've decided to keep our wedding an adults-only celebration. We hope you'll use this as an opportunity for a date night!",
        ),
        FaqEntry::new(
            "Can I take photos during the ceremony?",
            "We're having an unplugged ceremony - please keep phones and cameras away during the vows. Our photographer will capture everything! Feel free to snap away during the reception.",
        ),
        FaqEntry::new(
            "What about parking?",
            "There's complimentary valet parking available at the venue. The valet stand will be clearly marked near the main entrance.",
        ),
        FaqEntry::new(
            "Will there be an open bar?",
            "Yes! We'll have a full open bar during cocktail hour and dinner, featuring wine, beer, and signature cocktails. The bar will close at midnight.",
        ),
        FaqEntry::new(
            "What if I have dietary restrictions?",
            "Please let us know about any dietary restrictions when you RSVP. Our caterer can accommodate most allergies and dietary needs with advance notice.",
        ),
    ]
}
