//! Demo data
//!
//! Populates an empty database with two weight classes, six fighters, two
//! events and four fights. Everything goes through the services, so rankings
//! come out of the normal recalculation triggers.

use chrono::{Duration, Utc};

use crate::app::event_service::EventService;
use crate::app::fight_service::FightService;
use crate::app::ranking_service::RankingRecalculator;
use crate::app::roster_service::RosterService;
use crate::domain::entities::{NewEvent, NewFight, NewFighter, NewWeightClass};
use crate::domain::ports::{EventRepository, FightRepository, RosterRepository};
use crate::error::AppError;

/// (first name, last name, nickname, nationality, weight kg)
type FighterSeed = (&'static str, &'static str, &'static str, &'static str, i32);

const LIGHTWEIGHTS: [FighterSeed; 3] = [
    ("John", "Doe", "The Hammer", "USA", 70),
    ("Alex", "Smith", "The Eagle", "Brazil", 68),
    ("Carlos", "Santos", "El Toro", "Mexico", 69),
];

const WELTERWEIGHTS: [FighterSeed; 3] = [
    ("Mike", "Lee", "The Tiger", "UK", 77),
    ("Ivan", "Petrov", "The Bear", "Russia", 76),
    ("Sam", "Kim", "The Dragon", "Korea", 74),
];

/// Seed demo data unless the roster or the event list already has entries.
/// Returns whether anything was written.
pub async fn seed_demo_data<RR, FR, ER, R>(
    roster: &RosterService<RR, FR, R>,
    events: &EventService<ER, FR, RR, R>,
    fights: &FightService<FR, RR, ER, R>,
) -> Result<bool, AppError>
where
    RR: RosterRepository,
    FR: FightRepository,
    ER: EventRepository,
    R: RankingRecalculator,
{
    if !roster.list_weight_classes().await?.is_empty()
        || !roster.list_fighters().await?.is_empty()
        || !events.list().await?.is_empty()
    {
        tracing::info!("Database already has data, skipping demo seed");
        return Ok(false);
    }

    let lightweight = roster
        .create_weight_class(&NewWeightClass {
            name: "Lightweight".to_string(),
            min_weight_kg: 66,
            max_weight_kg: 70,
        })
        .await?;
    let welterweight = roster
        .create_weight_class(&NewWeightClass {
            name: "Welterweight".to_string(),
            min_weight_kg: 71,
            max_weight_kg: 77,
        })
        .await?;

    let mut fighters = Vec::with_capacity(LIGHTWEIGHTS.len() + WELTERWEIGHTS.len());
    for (class, seeds) in [(&lightweight, &LIGHTWEIGHTS), (&welterweight, &WELTERWEIGHTS)] {
        for &(first_name, last_name, nickname, nationality, weight_kg) in seeds.iter() {
            let fighter = roster
                .create_fighter(&NewFighter {
                    first_name: first_name.to_string(),
                    last_name: last_name.to_string(),
                    nickname: Some(nickname.to_string()),
                    nationality: Some(nationality.to_string()),
                    weight_kg: Some(weight_kg),
                    weight_class_id: Some(class.id),
                    ..Default::default()
                })
                .await?;
            fighters.push(fighter.id);
        }
    }
    let [doe, smith, santos, lee, petrov, kim] = [
        fighters[0],
        fighters[1],
        fighters[2],
        fighters[3],
        fighters[4],
        fighters[5],
    ];

    let now = Utc::now();
    let first_event = events
        .create(&NewEvent {
            name: "MMA Test Event 1".to_string(),
            location: Some("Test Arena 1".to_string()),
            date: now,
        })
        .await?;
    let second_event = events
        .create(&NewEvent {
            name: "MMA Test Event 2".to_string(),
            location: Some("Test Arena 2".to_string()),
            date: now + Duration::days(1),
        })
        .await?;

    let card = [
        (first_event.id, doe, smith, doe, "KO", 1, "2:30", "Knockout in round 1"),
        (first_event.id, santos, smith, santos, "Submission", 2, "3:10", "Armbar submission"),
        (second_event.id, lee, petrov, petrov, "Decision", 3, "5:00", "Unanimous decision"),
        (second_event.id, kim, lee, kim, "KO", 2, "1:45", "Head kick KO"),
    ];
    for (event_id, red, blue, winner, method, round, time, details) in card {
        fights
            .create(&NewFight {
                event_id: Some(event_id),
                fighter_red_id: red,
                fighter_blue_id: blue,
                winner_id: Some(winner),
                is_draw: false,
                method: Some(method.to_string()),
                round: Some(round),
                time: Some(time.to_string()),
                result_details: Some(details.to_string()),
            })
            .await?;
    }

    tracing::info!(
        weight_classes = 2,
        fighters = fighters.len(),
        events = 2,
        fights = card.len(),
        "Demo data seeded"
    );
    Ok(true)
}
