// =====================================================================================
// CARE PATHWAY - ACTION PLAN AND PATIENT/CLINICIAN SUMMARIES
// =====================================================================================

use std::collections::BTreeSet;

use crate::models::{ActionPlan, CarePathway, Severity, SymptomAnalysis, TriageSummary};
use crate::services::vocabulary::SymptomCategory;

pub const DISCLAIMER: &str =
    "This is automated guidance and not a substitute for professional medical consultation.";

const SELF_CARE_INSTRUCTIONS: &[&str] = &[
    "Rest and stay hydrated",
    "Use over-the-counter remedies as directed on the label",
    "Monitor your symptoms for changes",
    "Seek medical advice if symptoms worsen or last more than a few days",
];

const REFERRAL_INSTRUCTIONS: &[&str] = &[
    "Book an appointment with a healthcare provider within the next few days",
    "Keep a note of when symptoms occur and what makes them better or worse",
    "Continue to rest and stay hydrated",
    "Seek care sooner if symptoms get worse",
];

const URGENT_INSTRUCTIONS: &[&str] = &[
    "See a doctor or visit an urgent care clinic today",
    "Do not drive yourself if you feel unwell",
    "Bring a list of your current medications",
    "Call emergency services if symptoms become severe",
];

const EMERGENCY_INSTRUCTIONS: &[&str] = &[
    "Call emergency services (911) now",
    "Do not drive yourself to the hospital",
    "Stay with someone if possible",
    "Keep your phone nearby and the door unlocked",
];

pub fn urgency_label(pathway: CarePathway) -> &'static str {
    match pathway {
        CarePathway::SelfCare => "routine",
        CarePathway::Referral => "soon",
        CarePathway::Urgent => "urgent",
        CarePathway::Emergency => "immediate",
    }
}

fn instructions(pathway: CarePathway) -> &'static [&'static str] {
    match pathway {
        CarePathway::SelfCare => SELF_CARE_INSTRUCTIONS,
        CarePathway::Referral => REFERRAL_INSTRUCTIONS,
        CarePathway::Urgent => URGENT_INSTRUCTIONS,
        CarePathway::Emergency => EMERGENCY_INSTRUCTIONS,
    }
}

/// Category with the most matched symptoms; ties go to the clinically more
/// serious category.
pub fn dominant_category(symptoms: &BTreeSet<String>) -> Option<SymptomCategory> {
    SymptomCategory::ALL
        .into_iter()
        .map(|category| {
            let count = symptoms
                .iter()
                .filter(|symptom| SymptomCategory::of(symptom) == Some(category))
                .count();
            (category, count)
        })
        .filter(|(_, count)| *count > 0)
        .max_by_key(|(category, count)| (*count, category.clinical_priority()))
        .map(|(category, _)| category)
}

pub fn specialization(analysis: &SymptomAnalysis) -> &'static str {
    if analysis.severity == Severity::Emergency {
        return "emergency medicine";
    }

    dominant_category(&analysis.symptoms)
        .map(|category| category.specialization())
        .unwrap_or("general practice")
}

pub fn build_action_plan(analysis: &SymptomAnalysis) -> ActionPlan {
    let pathway = CarePathway::from(analysis.severity);

    ActionPlan {
        pathway,
        colour_code: pathway.colour_code().to_string(),
        urgency: urgency_label(pathway).to_string(),
        specialization: specialization(analysis).to_string(),
        instructions: instructions(pathway).iter().map(|s| s.to_string()).collect(),
    }
}

pub fn summarize(text: &str, analysis: &SymptomAnalysis, plan: &ActionPlan) -> TriageSummary {
    TriageSummary {
        patient_summary: patient_summary(plan),
        clinician_summary: clinician_summary(text, analysis, plan),
    }
}

fn patient_summary(plan: &ActionPlan) -> String {
    let mut summary = format!(
        "Based on your symptoms, you've been triaged as {}. Recommended action: {}. ",
        plan.colour_code,
        plan.pathway.label()
    );

    let first_steps: Vec<&str> = plan.instructions.iter().take(3).map(String::as_str).collect();
    if !first_steps.is_empty() {
        summary.push_str(&format!("Instructions: {}. ", first_steps.join("; ")));
    }

    summary.push_str("This is not a medical diagnosis. Seek professional help if symptoms worsen.");
    summary
}

fn clinician_summary(text: &str, analysis: &SymptomAnalysis, plan: &ActionPlan) -> String {
    let complaint = text.trim();
    let complaint = if complaint.is_empty() { "not stated" } else { complaint };

    format!(
        "Chief complaint: {}. Duration: {}. Associated symptoms: {}. Locations: {}. Triggers: {}. \
         Medical terms: {}. Triage level: {} ({}). Patient sentiment: {:?}. Confidence: {:.2}. \
         Recommended action: {} ({}, {}).",
        complaint,
        analysis.duration.as_deref().unwrap_or("unknown"),
        join_or_none(&analysis.symptoms),
        join_or_none(&analysis.body_parts),
        join_or_none(&analysis.triggers),
        join_or_none(&analysis.medical_terms),
        analysis.severity,
        plan.colour_code,
        analysis.sentiment,
        analysis.confidence,
        plan.pathway.label(),
        plan.urgency,
        plan.specialization,
    )
}

fn join_or_none(items: &BTreeSet<String>) -> String {
    if items.is_empty() {
        "none reported".to_string()
    } else {
        items.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
    }
}
