//! Built-in sport schemas.
//!
//! Football and basketball carry static ranges for every drill; the other
//! sports rely on ranges observed in each cohort.

use crate::{
    drill::Drill,
    schema::{Preset, SportSchema},
};

/// Ids of the built-in schemas, in registry order.
pub const BUILTIN_IDS: [&str; 6] = [
    "football",
    "soccer",
    "basketball",
    "baseball",
    "track",
    "volleyball",
];

/// Returns every built-in schema.
#[must_use]
pub fn builtin_schemas() -> Vec<SportSchema> {
    vec![
        football(),
        soccer(),
        basketball(),
        baseball(),
        track(),
        volleyball(),
    ]
}

/// Finds a built-in schema by id or sport name, ignoring ASCII case.
///
/// ```
/// # use tryout_scoring::registry;
/// assert_eq!(registry::lookup("Football").unwrap().id, "football");
/// assert_eq!(registry::lookup("track & field").unwrap().id, "track");
/// assert!(registry::lookup("curling").is_none());
/// ```
#[must_use]
pub fn lookup(id_or_sport: &str) -> Option<SportSchema> {
    let key = id_or_sport.trim();
    if key.is_empty() {
        return None;
    }
    let schemas = builtin_schemas();
    let by_id = schemas.iter().position(|s| s.id.eq_ignore_ascii_case(key));
    let index = by_id.or_else(|| {
        schemas
            .iter()
            .position(|s| s.sport.eq_ignore_ascii_case(key))
    })?;
    schemas.into_iter().nth(index)
}

fn schema(
    id: &str,
    sport: &str,
    name: &str,
    description: &str,
    drills: Vec<Drill>,
    presets: Vec<Preset>,
) -> SportSchema {
    SportSchema {
        id: id.to_owned(),
        sport: sport.to_owned(),
        name: name.to_owned(),
        description: description.to_owned(),
        drills,
        presets,
    }
}

fn preset(id: &str, name: &str, description: &str, weights: &[(&str, f64)]) -> Preset {
    Preset {
        id: id.to_owned(),
        name: name.to_owned(),
        description: description.to_owned(),
        weights: weights.iter().copied().collect(),
    }
}

fn football() -> SportSchema {
    schema(
        "football",
        "Football",
        "Football Combine",
        "Traditional football combine drills",
        vec![
            Drill::new("40m_dash", "40-Yard Dash", "sec", "speed")
                .lower_is_better()
                .with_range(3.0, 15.0)
                .with_default_weight(0.3),
            Drill::new("vertical_jump", "Vertical Jump", "in", "power")
                .with_range(0.0, 50.0)
                .with_default_weight(0.2),
            Drill::new("catching", "Catching", "pts", "skills")
                .with_range(0.0, 100.0)
                .with_default_weight(0.15),
            Drill::new("throwing", "Throwing", "pts", "skills")
                .with_range(0.0, 100.0)
                .with_default_weight(0.15),
            Drill::new("agility", "Agility", "pts", "agility")
                .with_range(0.0, 100.0)
                .with_default_weight(0.2),
        ],
        vec![
            preset(
                "balanced",
                "Balanced",
                "Equal emphasis on all skills",
                &[
                    ("40m_dash", 0.2),
                    ("vertical_jump", 0.2),
                    ("catching", 0.2),
                    ("throwing", 0.2),
                    ("agility", 0.2),
                ],
            ),
            preset(
                "speed",
                "Speed Focused",
                "Emphasizes speed and athleticism",
                &[
                    ("40m_dash", 0.4),
                    ("vertical_jump", 0.3),
                    ("catching", 0.1),
                    ("throwing", 0.1),
                    ("agility", 0.1),
                ],
            ),
            preset(
                "skills",
                "Skills Focused",
                "Emphasizes catching and throwing",
                &[
                    ("40m_dash", 0.1),
                    ("vertical_jump", 0.1),
                    ("catching", 0.35),
                    ("throwing", 0.35),
                    ("agility", 0.1),
                ],
            ),
            preset(
                "athletic",
                "Athletic",
                "Emphasizes physical abilities",
                &[
                    ("40m_dash", 0.25),
                    ("vertical_jump", 0.25),
                    ("catching", 0.15),
                    ("throwing", 0.15),
                    ("agility", 0.2),
                ],
            ),
        ],
    )
}

fn soccer() -> SportSchema {
    schema(
        "soccer",
        "Soccer",
        "Soccer Combine",
        "Comprehensive soccer skills evaluation",
        vec![
            Drill::new("sprint_speed", "20m Sprint", "sec", "speed")
                .lower_is_better()
                .with_default_weight(0.15),
            Drill::new("ball_control", "Ball Control", "pts", "technical")
                .with_default_weight(0.25),
            Drill::new("passing_accuracy", "Passing Accuracy", "pts", "technical")
                .with_default_weight(0.25),
            Drill::new("shooting_power", "Shooting Power", "mph", "technical")
                .with_default_weight(0.15),
            Drill::new("agility_cones", "Agility (Cones)", "sec", "agility")
                .lower_is_better()
                .with_default_weight(0.1),
            Drill::new("endurance", "Endurance (Beep Test)", "level", "fitness")
                .with_default_weight(0.1),
        ],
        vec![
            preset(
                "balanced",
                "Balanced",
                "Equal emphasis on all areas",
                &[
                    ("sprint_speed", 0.15),
                    ("ball_control", 0.2),
                    ("passing_accuracy", 0.2),
                    ("shooting_power", 0.15),
                    ("agility_cones", 0.15),
                    ("endurance", 0.15),
                ],
            ),
            preset(
                "technical",
                "Technical Focus",
                "Emphasizes ball skills and accuracy",
                &[
                    ("sprint_speed", 0.05),
                    ("ball_control", 0.35),
                    ("passing_accuracy", 0.35),
                    ("shooting_power", 0.15),
                    ("agility_cones", 0.05),
                    ("endurance", 0.05),
                ],
            ),
        ],
    )
}

fn basketball() -> SportSchema {
    schema(
        "basketball",
        "Basketball",
        "Basketball Combine",
        "Basketball skills and athleticism evaluation",
        vec![
            Drill::new("lane_agility", "Lane Agility", "sec", "agility")
                .lower_is_better()
                .with_range(8.0, 20.0)
                .with_default_weight(0.15),
            Drill::new("vertical_jump", "Vertical Jump", "in", "power")
                .with_range(0.0, 50.0)
                .with_default_weight(0.2),
            Drill::new("free_throws", "Free Throw %", "%", "shooting")
                .with_range(0.0, 100.0)
                .with_default_weight(0.2),
            Drill::new("three_point", "3-Point Shooting %", "%", "shooting")
                .with_range(0.0, 100.0)
                .with_default_weight(0.2),
            Drill::new("dribbling", "Ball Handling", "pts", "skills")
                .with_range(0.0, 100.0)
                .with_default_weight(0.15),
            Drill::new("defensive_slide", "Defensive Slides", "sec", "defense")
                .lower_is_better()
                .with_range(8.0, 20.0)
                .with_default_weight(0.1),
        ],
        vec![
            preset(
                "balanced",
                "Balanced",
                "Balanced approach",
                &[
                    ("lane_agility", 0.15),
                    ("vertical_jump", 0.15),
                    ("free_throws", 0.2),
                    ("three_point", 0.2),
                    ("dribbling", 0.15),
                    ("defensive_slide", 0.15),
                ],
            ),
            preset(
                "shooter",
                "Shooter Focus",
                "Emphasizes shooting abilities",
                &[
                    ("lane_agility", 0.1),
                    ("vertical_jump", 0.1),
                    ("free_throws", 0.35),
                    ("three_point", 0.35),
                    ("dribbling", 0.05),
                    ("defensive_slide", 0.05),
                ],
            ),
            preset(
                "athleticism",
                "Athleticism",
                "Emphasizes physical attributes",
                &[
                    ("lane_agility", 0.3),
                    ("vertical_jump", 0.3),
                    ("defensive_slide", 0.3),
                    ("dribbling", 0.05),
                    ("free_throws", 0.025),
                    ("three_point", 0.025),
                ],
            ),
            preset(
                "skill_focus",
                "Skill Focus",
                "Emphasizes ball handling and shooting",
                &[
                    ("dribbling", 0.5),
                    ("free_throws", 0.2),
                    ("three_point", 0.2),
                    ("lane_agility", 0.05),
                    ("vertical_jump", 0.025),
                    ("defensive_slide", 0.025),
                ],
            ),
        ],
    )
}

fn baseball() -> SportSchema {
    schema(
        "baseball",
        "Baseball",
        "Baseball Combine",
        "Baseball skills and athletic evaluation",
        vec![
            Drill::new("sprint_60", "60-Yard Sprint", "sec", "speed")
                .lower_is_better()
                .with_default_weight(0.2),
            Drill::new("exit_velocity", "Exit Velocity", "mph", "hitting").with_default_weight(0.3),
            Drill::new("throwing_velocity", "Throwing Velocity", "mph", "throwing")
                .with_default_weight(0.25),
            Drill::new("fielding_accuracy", "Fielding Accuracy", "pts", "fielding")
                .with_default_weight(0.15),
            Drill::new("pop_time", "Pop Time (Catchers)", "sec", "catching")
                .lower_is_better()
                .with_default_weight(0.1),
        ],
        vec![
            preset(
                "balanced",
                "Balanced",
                "Balanced evaluation",
                &[
                    ("sprint_60", 0.2),
                    ("exit_velocity", 0.2),
                    ("throwing_velocity", 0.2),
                    ("fielding_accuracy", 0.2),
                    ("pop_time", 0.2),
                ],
            ),
            preset(
                "hitter",
                "Hitter Focus",
                "Emphasizes hitting abilities",
                &[
                    ("sprint_60", 0.15),
                    ("exit_velocity", 0.5),
                    ("throwing_velocity", 0.15),
                    ("fielding_accuracy", 0.15),
                    ("pop_time", 0.05),
                ],
            ),
        ],
    )
}

fn track() -> SportSchema {
    schema(
        "track",
        "Track & Field",
        "Track & Field",
        "Track and field athletic evaluation",
        vec![
            Drill::new("sprint_100", "100m Sprint", "sec", "sprint")
                .lower_is_better()
                .with_default_weight(0.25),
            Drill::new("sprint_400", "400m Sprint", "sec", "sprint")
                .lower_is_better()
                .with_default_weight(0.15),
            Drill::new("long_jump", "Long Jump", "ft", "field").with_default_weight(0.2),
            Drill::new("high_jump", "High Jump", "ft", "field").with_default_weight(0.15),
            Drill::new("shot_put", "Shot Put", "ft", "field").with_default_weight(0.15),
            Drill::new("mile_time", "Mile Run", "min", "distance")
                .lower_is_better()
                .with_default_weight(0.1),
        ],
        vec![preset(
            "sprinter",
            "Sprinter Focus",
            "Short distance speed events",
            &[
                ("sprint_100", 0.45),
                ("sprint_400", 0.25),
                ("long_jump", 0.15),
                ("high_jump", 0.1),
                ("shot_put", 0.025),
                ("mile_time", 0.025),
            ],
        )],
    )
}

fn volleyball() -> SportSchema {
    schema(
        "volleyball",
        "Volleyball",
        "Volleyball Combine",
        "Volleyball skills evaluation",
        vec![
            Drill::new("vertical_jump", "Vertical Jump", "in", "power").with_default_weight(0.2),
            Drill::new("approach_jump", "Approach Jump", "in", "power").with_default_weight(0.2),
            Drill::new("serving_accuracy", "Serving Accuracy", "pts", "skills")
                .with_default_weight(0.15),
            Drill::new("passing_accuracy", "Passing Accuracy", "pts", "skills")
                .with_default_weight(0.15),
            Drill::new("attack_power", "Attack Power", "mph", "offense").with_default_weight(0.15),
            Drill::new("blocking_reach", "Blocking Reach", "in", "defense")
                .with_default_weight(0.15),
        ],
        vec![preset(
            "hitter",
            "Hitter Focus",
            "Outside hitter/attacker focus",
            &[
                ("vertical_jump", 0.25),
                ("approach_jump", 0.3),
                ("serving_accuracy", 0.1),
                ("passing_accuracy", 0.1),
                ("attack_power", 0.2),
                ("blocking_reach", 0.05),
            ],
        )],
    )
}
