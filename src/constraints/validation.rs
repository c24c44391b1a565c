use std::collections::HashMap;

use crate::constants::generator::MIN_PARTICIPANTS;
use crate::core::{Constraint, Groups, Participant};
use crate::error::GiftRingError;

/// Check participants, exclusions and families against each other and map
/// each participant to its index.
///
/// Fails on fewer than two participants, a repeated participant, a
/// self-exclusion, or an exclusion or family naming someone who is not
/// taking part.
pub fn validate_inputs<'a>(
    participants: &'a [Participant],
    constraints: &[Constraint],
    groups: &Groups,
) -> Result<HashMap<&'a str, usize>, GiftRingError> {
    if participants.len() < MIN_PARTICIPANTS {
        return Err(GiftRingError::TooFewParticipants {
            count: participants.len(),
        });
    }

    let mut index = HashMap::with_capacity(participants.len());
    for (i, participant) in participants.iter().enumerate() {
        if index.insert(participant.as_str(), i).is_some() {
            return Err(GiftRingError::DuplicateParticipant {
                name: participant.clone(),
            });
        }
    }

    for constraint in constraints {
        if constraint.is_self_pair() {
            return Err(GiftRingError::SelfConstraint {
                name: constraint.first().to_string(),
            });
        }
        for name in [constraint.first(), constraint.second()] {
            if !index.contains_key(name) {
                return Err(GiftRingError::UnknownParticipant {
                    name: name.to_string(),
                    context: format!("exclusion {constraint}"),
                });
            }
        }
    }

    for (family, members) in groups {
        if let Some(name) = members.iter().find(|m| !index.contains_key(m.as_str())) {
            return Err(GiftRingError::UnknownParticipant {
                name: name.clone(),
                context: format!("family '{family}'"),
            });
        }
    }

    Ok(index)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn names(list: &[&str]) -> Vec<Participant> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_index_follows_participant_order() {
        let participants = names(&["Theo", "Els", "Nico"]);
        let index = validate_inputs(&participants, &[], &Groups::new()).unwrap();

        assert_eq!(index["Theo"], 0);
        assert_eq!(index["Nico"], 2);
    }

    #[test]
    fn test_exclusion_typo_is_reported() {
        let participants = names(&["Theo", "Els", "Nico"]);
        let result = validate_inputs(
            &participants,
            &[Constraint::new("Theo", "Elz")],
            &Groups::new(),
        );

        let err = result.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unknown participant 'Elz' referenced by exclusion Elz ✕ Theo"
        );
    }
}
