use serde::{Deserialize, Serialize};

/// One room class of the hotel: a named category with a fixed number of
/// physical rooms and a per-room guest capacity. Reference data, seeded once.
#[derive(Debug, Serialize, Deserialize, Clone, sqlx::FromRow)]
pub struct RoomClass {
    pub id: i64,
    pub room_type: String,
    pub total_rooms: i64,
    pub capacity: i64,
}
