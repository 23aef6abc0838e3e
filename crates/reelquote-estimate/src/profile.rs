//! Estimator persona.

use serde::{Deserialize, Serialize};

/// Persona and rate anchors the model estimates against.
///
/// Rendered into the system instruction by [`EstimatorProfile::system_instruction`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimatorProfile {
    /// Full display name of the freelancer (e.g., "Binyam G.").
    pub name: String,
    /// Short name used in the rate sentence.
    pub short_name: String,
    /// Role description (e.g., "2D/3D Animator and Video Editor").
    pub role: String,
    /// Years of professional experience.
    pub experience_years: u32,
    /// Specialties, as a human-readable list.
    pub specialties: String,
    /// Typical hourly rate in US dollars.
    pub hourly_rate_usd: u32,
    /// Example effort figures that anchor the estimate.
    pub effort_guidance: String,
}

impl Default for EstimatorProfile {
    fn default() -> Self {
        Self {
            name: "Binyam G.".to_string(),
            short_name: "Binyam".to_string(),
            role: "2D/3D Animator and Video Editor".to_string(),
            experience_years: 8,
            specialties: "motion graphics, VFX, and short-form content".to_string(),
            hourly_rate_usd: 50,
            effort_guidance: "A simple 30-second motion graphic might take 10-15 hours, while a complex 1-minute 3D animation could take 40+ hours.".to_string(),
        }
    }
}

impl EstimatorProfile {
    /// Returns a copy of this profile with a different hourly rate.
    #[must_use]
    pub fn with_hourly_rate(mut self, hourly_rate_usd: u32) -> Self {
        self.hourly_rate_usd = hourly_rate_usd;
        self
    }

    /// Renders the fixed system instruction sent with every request.
    #[must_use]
    pub fn system_instruction(&self) -> String {
        let name = if self.name.ends_with('.') {
            self.name.clone()
        } else {
            format!("{}.", self.name)
        };

        format!(
            "You are an expert project estimator for a freelance {role} named {name} \
             Your task is to provide a cost and timeline estimate based on a client's project description. \
             {short} is a top-rated freelancer with {years}+ years of experience, specializing in {specialties}. \
             {short}'s typical rates are around ${rate}/hour. \
             {guidance} \
             Base your estimate on the complexity, length, and style mentioned in the description. \
             Always provide a cost range, a timeline, a breakdown of services, and any assumptions you made. \
             Be realistic and professional. Respond only in the requested JSON format.",
            role = self.role,
            short = self.short_name,
            years = self.experience_years,
            specialties = self.specialties,
            rate = self.hourly_rate_usd,
            guidance = self.effort_guidance,
        )
    }
}
