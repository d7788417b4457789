use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

pub const MIN_TEAM_SIZE: usize = 2;
pub const MAX_TEAM_SIZE: usize = 20;

pub fn clamp_team_size(size: usize) -> usize {
    size.clamp(MIN_TEAM_SIZE, MAX_TEAM_SIZE)
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TeamsInvalid {
    #[error("add at least 2 names to build teams")]
    TooFew { found: usize },
    #[error("{count} names can't be split into teams of {divisor}: {remainder} left over")]
    NotDivisible {
        count: usize,
        remainder: usize,
        divisor: usize,
    },
}

impl TeamsInvalid {
    pub fn code(&self) -> &'static str {
        match self {
            TeamsInvalid::TooFew { .. } => "too_few",
            TeamsInvalid::NotDivisible { .. } => "not_divisible",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeamsValidation {
    Valid { team_count: usize, team_size: usize },
    Invalid(TeamsInvalid),
}

impl TeamsValidation {
    pub fn is_valid(&self) -> bool {
        matches!(self, TeamsValidation::Valid { .. })
    }

    pub fn team_count(&self) -> Option<usize> {
        match self {
            TeamsValidation::Valid { team_count, .. } => Some(*team_count),
            TeamsValidation::Invalid(_) => None,
        }
    }

    pub fn remainder(&self) -> usize {
        match self {
            TeamsValidation::Invalid(TeamsInvalid::NotDivisible { remainder, .. }) => *remainder,
            _ => 0,
        }
    }

    pub fn into_result(self) -> Result<(usize, usize), TeamsInvalid> {
        match self {
            TeamsValidation::Valid {
                team_count,
                team_size,
            } => Ok((team_count, team_size)),
            TeamsValidation::Invalid(reason) => Err(reason),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    pub label: String,
    pub members: Vec<String>,
}

pub fn validate<S: AsRef<str>>(clean_names: &[S], team_size: usize) -> TeamsValidation {
    let size = clamp_team_size(team_size);
    let count = clean_names.len();

    if count < 2 {
        return TeamsValidation::Invalid(TeamsInvalid::TooFew { found: count });
    }

    let remainder = count % size;
    if remainder != 0 {
        return TeamsValidation::Invalid(TeamsInvalid::NotDivisible {
            count,
            remainder,
            divisor: size,
        });
    }

    TeamsValidation::Valid {
        team_count: count / size,
        team_size: size,
    }
}

pub fn generate<S: AsRef<str>, R: Rng + ?Sized>(
    clean_names: &[S],
    team_size: usize,
    rng: &mut R,
) -> Result<Vec<Team>, TeamsInvalid> {
    let (team_count, size) = validate(clean_names, team_size).into_result()?;

    let mut pool: Vec<String> = clean_names
        .iter()
        .map(|name| name.as_ref().to_owned())
        .collect();
    pool.shuffle(rng);

    let teams: Vec<Team> = pool
        .chunks(size)
        .enumerate()
        .map(|(index, members)| Team {
            label: format!("Team {}", index + 1),
            members: members.to_vec(),
        })
        .collect();

    debug!("built {} teams of {}", team_count, size);
    Ok(teams)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn names(count: usize) -> Vec<String> {
        (0..count).map(|i| format!("p{i}")).collect()
    }

    #[test]
    fn five_names_in_pairs_leaves_one() {
        let result = validate(&names(5), 2);
        assert!(!result.is_valid());
        assert_eq!(result.remainder(), 1);
        assert_eq!(
            result,
            TeamsValidation::Invalid(TeamsInvalid::NotDivisible {
                count: 5,
                remainder: 1,
                divisor: 2,
            })
        );
        if let TeamsValidation::Invalid(reason) = result {
            assert_eq!(reason.code(), "not_divisible");
            assert_eq!(
                reason.to_string(),
                "5 names can't be split into teams of 2: 1 left over"
            );
        }
    }

    #[test]
    fn too_few_names() {
        for count in 0..2 {
            let result = validate(&names(count), 2);
            assert_eq!(
                result,
                TeamsValidation::Invalid(TeamsInvalid::TooFew { found: count })
            );
        }
        assert_eq!(TeamsInvalid::TooFew { found: 1 }.code(), "too_few");
    }

    #[test]
    fn team_size_is_clamped_before_validation() {
        assert_eq!(clamp_team_size(0), 2);
        assert_eq!(clamp_team_size(1), 2);
        assert_eq!(clamp_team_size(7), 7);
        assert_eq!(clamp_team_size(500), 20);

        assert_eq!(validate(&names(6), 1).team_count(), Some(3));
        assert_eq!(validate(&names(40), 99).team_count(), Some(2));
    }

    #[test]
    fn valid_split_reports_team_count() {
        let result = validate(&names(12), 3);
        assert!(result.is_valid());
        assert_eq!(result.team_count(), Some(4));
        assert_eq!(result.remainder(), 0);
    }

    #[test]
    fn generate_refuses_partial_partitions() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = generate(&names(7), 3, &mut rng).unwrap_err();
        assert_eq!(err.code(), "not_divisible");
        assert!(generate(&names(1), 2, &mut rng).is_err());
    }

    #[test]
    fn teams_are_labelled_in_order() {
        let mut rng = StdRng::seed_from_u64(2);
        let teams = generate(&names(9), 3, &mut rng).unwrap();
        let labels: Vec<&str> = teams.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["Team 1", "Team 2", "Team 3"]);
    }

    #[test]
    fn regenerating_reshuffles() {
        let mut rng = StdRng::seed_from_u64(3);
        let roster = names(20);
        let first = generate(&roster, 4, &mut rng).unwrap();
        let second = generate(&roster, 4, &mut rng).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn placement_is_roughly_uniform() {
        let mut rng = StdRng::seed_from_u64(4);
        let roster = names(4);
        let rounds = 4000;
        let mut first_team_hits = 0;
        for _ in 0..rounds {
            let teams = generate(&roster, 2, &mut rng).unwrap();
            if teams[0].members.contains(&roster[0]) {
                first_team_hits += 1;
            }
        }
        assert!((1800..=2200).contains(&first_team_hits), "{first_team_hits}");
    }

    proptest! {
        #[test]
        fn every_name_lands_in_exactly_one_team(
            seed in any::<u64>(),
            size in 2usize..=20,
            team_count in 1usize..8,
        ) {
            let roster = names(size * team_count);
            let mut rng = StdRng::seed_from_u64(seed);
            let teams = generate(&roster, size, &mut rng).unwrap();

            prop_assert_eq!(teams.len(), team_count);
            prop_assert!(teams.iter().all(|t| t.members.len() == size));

            let mut seen: Vec<String> = teams.into_iter().flat_map(|t| t.members).collect();
            seen.sort();
            let mut expected = roster;
            expected.sort();
            prop_assert_eq!(seen, expected);
        }
    }
}
