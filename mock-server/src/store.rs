use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use log::info;
use tokio::sync::RwLock;

use puppy_bowl_protocol::envelope::ApiError;
use puppy_bowl_protocol::{NewPlayer, Player, PlayerId, PlayerStatus, Team, TeamId};

pub type SharedStore = Arc<Store>;

/// Players of one cohort, ordered by id.
#[derive(Default)]
pub struct CohortRoster {
    pub players: BTreeMap<PlayerId, Player>,
}

/// Rosters of every cohort seen so far. Cohorts are created on first access.
#[derive(Default)]
pub struct Store {
    rosters: RwLock<HashMap<String, CohortRoster>>,
    teams: Vec<Team>,
    demo_roster: bool,
    next_player_id: AtomicU64,
}

impl Store {
    /// Every new cohort starts out with a few players, some of them on a team.
    pub fn with_demo_roster() -> Self {
        Store {
            teams: vec![
                Team {
                    id: TeamId::new(1),
                    name: "Ruff".to_owned(),
                    score: Some(0),
                },
                Team {
                    id: TeamId::new(2),
                    name: "Fluff".to_owned(),
                    score: Some(0),
                },
            ],
            demo_roster: true,
            ..Store::default()
        }
    }

    fn next_id(&self) -> PlayerId {
        PlayerId::new(self.next_player_id.fetch_add(1, Ordering::Relaxed) + 1)
    }

    fn demo_players(&self) -> CohortRoster {
        let mut roster = CohortRoster::default();
        if !self.demo_roster {
            return roster;
        }
        let demo = [
            ("Rex", "Boxer", PlayerStatus::Field, Some(TeamId::new(1))),
            ("Crumpet", "American Staffordshire Terrier", PlayerStatus::Bench, Some(TeamId::new(2))),
            ("Biscuit", "Beagle", PlayerStatus::Bench, None),
        ];
        for (name, breed, status, team_id) in demo {
            let player = Player {
                id: self.next_id(),
                name: name.to_owned(),
                breed: breed.to_owned(),
                status,
                image_url: DEFAULT_IMAGE_URL.to_owned(),
                team_id,
                cohort_id: None,
                created_at: None,
                updated_at: None,
                team: None,
            };
            roster.players.insert(player.id, player);
        }
        roster
    }

    fn team(&self, team_id: Option<TeamId>) -> Option<Team> {
        let team_id = team_id?;
        self.teams.iter().find(|team| team.id == team_id).cloned()
    }

    fn cohort<'a>(
        &self,
        rosters: &'a mut HashMap<String, CohortRoster>,
        cohort: &str,
    ) -> &'a mut CohortRoster {
        rosters
            .entry(cohort.to_owned())
            .or_insert_with(|| self.demo_players())
    }

    /// All players of `cohort`, without their teams embedded.
    pub async fn list(&self, cohort: &str) -> Vec<Player> {
        let mut rosters = self.rosters.write().await;
        let roster = self.cohort(&mut rosters, cohort);
        roster.players.values().cloned().collect()
    }

    /// One player with its team embedded.
    pub async fn get(&self, cohort: &str, player_id: PlayerId) -> Option<Player> {
        let mut rosters = self.rosters.write().await;
        let roster = self.cohort(&mut rosters, cohort);
        let mut player = roster.players.get(&player_id)?.clone();
        player.team = self.team(player.team_id);
        Some(player)
    }

    pub async fn add(&self, cohort: &str, new_player: NewPlayer) -> Result<Player, ApiError> {
        for (field, value) in [("name", &new_player.name), ("breed", &new_player.breed)] {
            if value.trim().is_empty() {
                return Err(ApiError::new(
                    "ValidationError",
                    format!("{field} must not be empty"),
                ));
            }
        }
        let image_url = if new_player.image_url.trim().is_empty() {
            DEFAULT_IMAGE_URL.to_owned()
        } else {
            new_player.image_url
        };

        let mut rosters = self.rosters.write().await;
        let roster = self.cohort(&mut rosters, cohort);
        let player = Player {
            id: self.next_id(),
            name: new_player.name,
            breed: new_player.breed,
            status: new_player.status,
            image_url,
            team_id: None,
            cohort_id: None,
            created_at: None,
            updated_at: None,
            team: None,
        };
        info!("cohort {cohort}: added player #{} ({})", player.id, player.name);
        roster.players.insert(player.id, player.clone());
        Ok(player)
    }

    pub async fn remove(&self, cohort: &str, player_id: PlayerId) -> Option<Player> {
        let mut rosters = self.rosters.write().await;
        let removed = self.cohort(&mut rosters, cohort).players.remove(&player_id);
        if removed.is_some() {
            info!("cohort {cohort}: removed player #{player_id}");
        }
        removed
    }
}

/// Picture used when a new player comes without one.
pub const DEFAULT_IMAGE_URL: &str =
    "https://learndotresources.s3.amazonaws.com/workshop/60ad725bbe74cd0004a6cba0/puppybowl-default-dog.png";
