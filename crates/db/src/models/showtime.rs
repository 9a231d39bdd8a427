use chrono::{NaiveDate, NaiveTime};
use cinematic_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from `seances`: one screening of a film.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Showtime {
    pub id: DbId,
    pub film_id: DbId,
    pub date: NaiveDate,
    pub heure: NaiveTime,
    pub places_disponibles: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_serializes_with_seconds() {
        let showtime = Showtime {
            id: 1,
            film_id: 7,
            date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            heure: NaiveTime::from_hms_opt(20, 0, 0).unwrap(),
            places_disponibles: 12,
        };

        let json = serde_json::to_value(&showtime).unwrap();
        assert_eq!(json["date"], "2024-05-01");
        assert_eq!(json["heure"], "20:00:00");
        assert_eq!(json["places_disponibles"], 12);
    }
}
