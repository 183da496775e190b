pub mod events;
pub mod leaderboard;
pub mod organizations;
pub mod players;
pub mod results;
