use serde::{Deserialize, Serialize};

use crate::identity::Role;

/// Approximate CO2 saved per kilogram of e-waste diverted.
pub const CO2_KG_PER_EWASTE_KG: f64 = 0.67;

/// Sustainability counters for one user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImpactSummary {
    pub ewaste_saved_kg: f64,
    pub co2_reduced_kg: f64,
    pub successful_reuses: u32,
    /// Only tracked for businesses.
    pub total_components: Option<u32>,
}

/// One tile of the impact overview.
#[derive(Debug, Clone, PartialEq)]
pub struct ImpactCard {
    pub title: &'static str,
    pub value: String,
    pub description: &'static str,
}

/// The three impact tiles, worded for the viewer's role.
pub fn impact_cards(impact: &ImpactSummary, role: Role) -> [ImpactCard; 3] {
    let ewaste_description = match role {
        Role::Consumer => "Components diverted from landfill",
        Role::Business => "Components reused",
    };
    let third = match role {
        Role::Consumer => ImpactCard {
            title: "Successful Reuses",
            value: impact.successful_reuses.to_string(),
            description: "Components successfully reused",
        },
        Role::Business => ImpactCard {
            title: "Components Acquired",
            value: impact.total_components.unwrap_or(0).to_string(),
            description: "Total components sourced",
        },
    };
    [
        ImpactCard {
            title: "E-waste Saved",
            value: format!("{} kg", impact.ewaste_saved_kg),
            description: ewaste_description,
        },
        ImpactCard {
            title: "CO₂ Reduced",
            value: format!("{} kg", impact.co2_reduced_kg),
            description: "Carbon footprint reduction",
        },
        third,
    ]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Milestone {
    pub title: &'static str,
    pub description: &'static str,
    pub achieved: bool,
}

/// Achievement badges on the consumer impact page.
pub fn consumer_milestones(impact: &ImpactSummary, listing_count: usize) -> Vec<Milestone> {
    vec![
        Milestone {
            title: "First Upload",
            description: "Listed your first component",
            achieved: listing_count > 0,
        },
        Milestone {
            title: "Eco Warrior",
            description: "Saved 5kg of e-waste",
            achieved: impact.ewaste_saved_kg >= 5.0,
        },
        Milestone {
            title: "Carbon Saver",
            description: "Reduced 3kg of CO₂",
            achieved: impact.co2_reduced_kg >= 3.0,
        },
        Milestone {
            title: "Reuse Champion",
            description: "5 successful reuses",
            achieved: impact.successful_reuses >= 5,
        },
    ]
}

/// Progress towards `goal` as a percentage in `0.0..=100.0`.
pub fn progress_percent(value: f64, goal: f64) -> f64 {
    if goal <= 0.0 {
        return 100.0;
    }
    (value / goal * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ImpactSummary {
        ImpactSummary {
            ewaste_saved_kg: 3.6,
            co2_reduced_kg: 2.4,
            successful_reuses: 2,
            total_components: None,
        }
    }

    #[test]
    fn cards_follow_role() {
        let consumer = impact_cards(&sample(), Role::Consumer);
        assert_eq!(consumer[0].value, "3.6 kg");
        assert_eq!(consumer[2].title, "Successful Reuses");
        assert_eq!(consumer[2].value, "2");

        let business = impact_cards(&sample(), Role::Business);
        assert_eq!(business[2].title, "Components Acquired");
        assert_eq!(business[2].value, "0");
    }

    #[test]
    fn milestones_use_thresholds() {
        let milestones = consumer_milestones(&sample(), 2);
        let achieved: Vec<_> = milestones
            .iter()
            .filter(|m| m.achieved)
            .map(|m| m.title)
            .collect();
        assert_eq!(achieved, vec!["First Upload"]);
    }

    #[test]
    fn progress_is_capped() {
        assert_eq!(progress_percent(20.0, 10.0), 100.0);
        assert_eq!(progress_percent(5.0, 10.0), 50.0);
        assert_eq!(progress_percent(1.0, 0.0), 100.0);
    }
}
