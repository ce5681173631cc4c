// =====================================================================================
// ADVICE TEMPLATES - ONE FAMILY PER DOMINANT SYMPTOM, ONE TEXT PER SEVERITY TIER
// =====================================================================================

use serde::Serialize;

use crate::models::{Severity, SymptomAnalysis};

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TemplateFamily {
    Headache,
    Fever,
    Cough,
    ChestPain,
    Pain,
    Fatigue,
    Nausea,
    General,
    Welcome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Mild,
    Moderate,
    Severe,
}

impl From<Severity> for Tier {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Low => Tier::Mild,
            Severity::Moderate => Tier::Moderate,
            Severity::High | Severity::Emergency => Tier::Severe,
        }
    }
}

#[derive(Debug)]
pub struct AdviceTemplate {
    pub family: TemplateFamily,
    pub mild: &'static str,
    pub moderate: &'static str,
    pub severe: &'static str,
}

impl AdviceTemplate {
    pub fn text(&self, tier: Tier) -> &'static str {
        match tier {
            Tier::Mild => self.mild,
            Tier::Moderate => self.moderate,
            Tier::Severe => self.severe,
        }
    }
}

/// Checked top to bottom; a family is chosen when the analysis holds one of its
/// symptoms, or one of its body parts together with any symptom.
struct FamilyRule {
    family: TemplateFamily,
    symptoms: &'static [&'static str],
    body_parts: &'static [&'static str],
}

const FAMILY_RULES: &[FamilyRule] = &[
    FamilyRule {
        family: TemplateFamily::Headache,
        symptoms: &["headache", "migraine"],
        body_parts: &["head"],
    },
    FamilyRule {
        family: TemplateFamily::Fever,
        symptoms: &["fever", "chills"],
        body_parts: &[],
    },
    FamilyRule {
        family: TemplateFamily::Cough,
        symptoms: &["cough", "wheezing", "congestion", "sore throat"],
        body_parts: &[],
    },
    FamilyRule {
        family: TemplateFamily::ChestPain,
        symptoms: &["chest pain", "chest tightness", "palpitations", "racing heart", "irregular heartbeat"],
        body_parts: &["chest"],
    },
    FamilyRule {
        family: TemplateFamily::Pain,
        symptoms: &["pain", "ache", "aching", "hurt", "sore", "cramp", "throbbing", "stiffness", "stomach ache"],
        body_parts: &[],
    },
    FamilyRule {
        family: TemplateFamily::Fatigue,
        symptoms: &["fatigue", "tired", "exhausted", "weakness"],
        body_parts: &[],
    },
    FamilyRule {
        family: TemplateFamily::Nausea,
        symptoms: &["nausea", "nauseous", "vomiting"],
        body_parts: &[],
    },
];

pub const LOCATION_PLACEHOLDER: &str = "{location}";

pub static ADVICE_TEMPLATES: &[AdviceTemplate] = &[
    AdviceTemplate {
        family: TemplateFamily::Headache,
        mild: "For a mild headache, rest in a quiet, dark room, drink plenty of water and consider an \
               over-the-counter pain reliever such as paracetamol or ibuprofen, following the label. \
               Screen breaks and regular meals often help.",
        moderate: "A headache that keeps bothering you deserves attention. Stay hydrated, rest, avoid \
                   screens and bright light, and take an over-the-counter pain reliever as directed. \
                   If it lasts more than a couple of days or keeps returning, book an appointment with a doctor.",
        severe: "A severe headache needs prompt medical assessment. Please visit an urgent care clinic or \
                 see a doctor today, especially if it came on suddenly, is the worst you have had, or comes \
                 with fever, a stiff neck, confusion, vision changes or weakness.",
    },
    AdviceTemplate {
        family: TemplateFamily::Fever,
        mild: "For a mild fever, rest, drink plenty of fluids and dress in light layers. Paracetamol or \
               ibuprofen can bring the temperature down. Check your temperature every few hours.",
        moderate: "A fever with other symptoms should be watched closely. Keep drinking fluids, rest, and \
                   use fever reducers as directed. If the fever lasts more than three days or keeps \
                   rising, arrange to see a doctor.",
        severe: "A high or persistent fever needs medical attention. Please contact a doctor or urgent care \
                 today, particularly if you also have a rash, stiff neck, confusion or trouble breathing.",
    },
    AdviceTemplate {
        family: TemplateFamily::Cough,
        mild: "For a mild cough, warm drinks with honey, staying hydrated and resting your voice usually \
               help. A humidifier or steam can ease irritation.",
        moderate: "A cough that is hanging on or getting worse should be monitored. Stay hydrated, rest and \
                   avoid smoke. If it lasts longer than two weeks or brings up coloured mucus, see a doctor.",
        severe: "A severe cough needs to be checked by a doctor soon, especially with fever, chest \
                 discomfort, wheezing or shortness of breath. Please arrange an urgent appointment.",
    },
    AdviceTemplate {
        family: TemplateFamily::ChestPain,
        mild: CHEST_PAIN_ADVICE,
        moderate: CHEST_PAIN_ADVICE,
        severe: CHEST_PAIN_ADVICE,
    },
    AdviceTemplate {
        family: TemplateFamily::Pain,
        mild: "For mild discomfort in {location}, rest the area, apply ice or heat for 15 to 20 minutes at a \
               time, and consider an over-the-counter pain reliever. Gentle movement often helps recovery.",
        moderate: "Ongoing pain in {location} should be looked at if it does not settle. Rest, use ice or \
                   heat, and avoid activities that make it worse. If it has not improved in a few days, \
                   book an appointment with a doctor.",
        severe: "Severe pain in {location} should be assessed by a medical professional. Please see a doctor \
                 or visit urgent care today, particularly if there is swelling, deformity, numbness or you \
                 cannot put weight on it.",
    },
    AdviceTemplate {
        family: TemplateFamily::Fatigue,
        mild: "Feeling tired is common. Aim for regular sleep, balanced meals, water through the day and \
               some light activity. Cutting back on caffeine late in the day can help.",
        moderate: "Tiredness that keeps bothering you can have many causes. Keep a regular sleep routine, \
                   eat well and stay hydrated. If it continues for more than two weeks, a doctor can check \
                   for things like anaemia or thyroid problems.",
        severe: "Severe exhaustion or weakness should be checked by a doctor soon, especially with weight \
                 loss, fever, shortness of breath or if it stops you doing everyday tasks.",
    },
    AdviceTemplate {
        family: TemplateFamily::Nausea,
        mild: "For mild nausea, sip clear fluids slowly, eat small bland meals such as toast or rice, and \
               rest. Ginger or peppermint tea may help settle your stomach.",
        moderate: "Nausea that keeps returning needs care to avoid dehydration. Take small, frequent sips of \
                   water or an oral rehydration drink. If you cannot keep fluids down for a day, contact a doctor.",
        severe: "Severe nausea or repeated vomiting can lead to dehydration. Please see a doctor or urgent \
                 care today, particularly if you notice blood, severe stomach pain or signs of dehydration.",
    },
    AdviceTemplate {
        family: TemplateFamily::General,
        mild: "Thanks for describing your symptoms. Rest, stay hydrated and keep an eye on how you feel \
               over the next day or two.",
        moderate: "You have several symptoms going on together. Rest, keep drinking fluids and note any \
                   changes. A doctor's appointment in the next few days would be sensible if things do not improve.",
        severe: "The combination of symptoms you describe should be assessed by a doctor. Please arrange to \
                 be seen today.",
    },
    AdviceTemplate {
        family: TemplateFamily::Welcome,
        mild: WELCOME_MESSAGE,
        moderate: WELCOME_MESSAGE,
        severe: WELCOME_MESSAGE,
    },
];

const CHEST_PAIN_ADVICE: &str = "Chest discomfort should always be taken seriously. Please seek medical care \
     promptly: contact a doctor or urgent care now, and call emergency services if the pain spreads to your \
     arm, jaw or back, or comes with sweating, nausea or shortness of breath.";

const WELCOME_MESSAGE: &str = "Hello! I'm here to help with any health questions. Tell me what symptoms you \
     are experiencing, where you feel them and how long they have been going on, and I'll suggest next steps.";

pub const SEEK_CARE_DIRECTIVE: &str = "Please seek medical care today. If your symptoms get worse quickly, \
     call emergency services or go to the nearest emergency room.";

pub const EMERGENCY_HEADER: &str = "This sounds like it could be a medical emergency.";

pub const EMERGENCY_INSTRUCTIONS: &str = "Please call emergency services (911) or go to the nearest emergency \
     room immediately. Do not wait to see if it improves, and do not drive yourself. If you are having \
     thoughts of harming yourself, call or text 988 to reach a crisis line right now.";

/// Walks the ordered family rules; falls back to the general family when
/// symptoms were found, or the welcome message when none were.
pub fn select_family(analysis: &SymptomAnalysis) -> TemplateFamily {
    if !analysis.has_symptoms() {
        return TemplateFamily::Welcome;
    }

    FAMILY_RULES
        .iter()
        .find(|rule| {
            rule.symptoms.iter().any(|s| analysis.symptoms.contains(*s))
                || rule.body_parts.iter().any(|p| analysis.body_parts.contains(*p))
        })
        .map(|rule| rule.family)
        .unwrap_or(TemplateFamily::General)
}

pub fn template_for(family: TemplateFamily) -> Option<&'static AdviceTemplate> {
    ADVICE_TEMPLATES.iter().find(|template| template.family == family)
}

/// Advice paragraph for the family, tiered by severity, with the pain location
/// filled in and the seek-care directive appended for `High` and above.
pub fn render_advice(family: TemplateFamily, analysis: &SymptomAnalysis) -> String {
    let tier = Tier::from(analysis.severity);
    let text = template_for(family)
        .map(|template| template.text(tier))
        .unwrap_or(WELCOME_MESSAGE);

    let mut advice = text.replace(LOCATION_PLACEHOLDER, &describe_location(analysis));

    if family != TemplateFamily::Welcome && analysis.severity >= Severity::High {
        advice.push_str("\n\n");
        advice.push_str(SEEK_CARE_DIRECTIVE);
    }

    advice
}

pub fn render_emergency(analysis: &SymptomAnalysis) -> String {
    let mut content = String::from(EMERGENCY_HEADER);

    if analysis.has_symptoms() {
        let listed: Vec<&str> = analysis.symptoms.iter().map(String::as_str).collect();
        content.push_str(" Symptoms you mentioned: ");
        content.push_str(&listed.join(", "));
        content.push('.');
    }

    content.push_str("\n\n");
    content.push_str(EMERGENCY_INSTRUCTIONS);
    content
}

fn describe_location(analysis: &SymptomAnalysis) -> String {
    analysis
        .body_parts
        .iter()
        .next()
        .map(|part| format!("your {}", part))
        .unwrap_or_else(|| "the affected area".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analysis(symptoms: &[&str], body_parts: &[&str], severity: Severity) -> SymptomAnalysis {
        SymptomAnalysis {
            symptoms: symptoms.iter().map(|s| s.to_string()).collect(),
            body_parts: body_parts.iter().map(|s| s.to_string()).collect(),
            severity,
            ..SymptomAnalysis::default()
        }
    }

    #[test]
    fn test_every_family_has_a_template() {
        for family in [
            TemplateFamily::Headache,
            TemplateFamily::Fever,
            TemplateFamily::Cough,
            TemplateFamily::ChestPain,
            TemplateFamily::Pain,
            TemplateFamily::Fatigue,
            TemplateFamily::Nausea,
            TemplateFamily::General,
            TemplateFamily::Welcome,
        ] {
            assert!(template_for(family).is_some(), "missing template for {:?}", family);
        }
    }

    #[test]
    fn test_family_selection_order() {
        assert_eq!(select_family(&analysis(&["headache", "fever"], &[], Severity::Moderate)), TemplateFamily::Headache);
        assert_eq!(select_family(&analysis(&["fever", "cough"], &[], Severity::Moderate)), TemplateFamily::Fever);
        assert_eq!(select_family(&analysis(&["cough"], &[], Severity::Low)), TemplateFamily::Cough);
        assert_eq!(select_family(&analysis(&["pain"], &["chest"], Severity::Low)), TemplateFamily::ChestPain);
        assert_eq!(select_family(&analysis(&["ache"], &["knee"], Severity::Low)), TemplateFamily::Pain);
        assert_eq!(select_family(&analysis(&["tired"], &[], Severity::Low)), TemplateFamily::Fatigue);
        assert_eq!(select_family(&analysis(&["vomiting"], &[], Severity::Low)), TemplateFamily::Nausea);
        assert_eq!(select_family(&analysis(&["rash"], &[], Severity::Low)), TemplateFamily::General);
        assert_eq!(select_family(&analysis(&[], &["knee"], Severity::Low)), TemplateFamily::Welcome);
    }

    #[test]
    fn test_severity_tiers_produce_different_text() {
        let mild = render_advice(TemplateFamily::Headache, &analysis(&["headache"], &[], Severity::Low));
        let moderate = render_advice(TemplateFamily::Headache, &analysis(&["headache"], &[], Severity::Moderate));
        let severe = render_advice(TemplateFamily::Headache, &analysis(&["headache"], &[], Severity::High));

        assert_ne!(mild, moderate);
        assert_ne!(moderate, severe);
        assert!(severe.contains("urgent care"));
        assert!(severe.contains(SEEK_CARE_DIRECTIVE));
        assert!(!mild.contains(SEEK_CARE_DIRECTIVE));
    }

    #[test]
    fn test_chest_pain_ignores_severity() {
        let low = render_advice(TemplateFamily::ChestPain, &analysis(&["chest tightness"], &[], Severity::Low));
        let moderate = render_advice(TemplateFamily::ChestPain, &analysis(&["chest tightness"], &[], Severity::Moderate));
        assert_eq!(low, moderate);
        assert!(low.contains("seek medical care"));
    }

    #[test]
    fn test_pain_location_lookup() {
        let advice = render_advice(TemplateFamily::Pain, &analysis(&["ache"], &["knee"], Severity::Low));
        assert!(advice.contains("your knee"));
        assert!(!advice.contains(LOCATION_PLACEHOLDER));

        let advice = render_advice(TemplateFamily::Pain, &analysis(&["ache"], &[], Severity::Low));
        assert!(advice.contains("the affected area"));
    }

    #[test]
    fn test_emergency_lists_symptoms() {
        let content = render_emergency(&analysis(&["chest pain", "pain"], &["chest"], Severity::Emergency));
        assert!(content.starts_with(EMERGENCY_HEADER));
        assert!(content.contains("chest pain, pain"));
        assert!(content.contains("emergency services"));
    }
}
