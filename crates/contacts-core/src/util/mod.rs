pub mod date;

use uuid::Uuid;

pub fn get_uuid_v4() -> Uuid {
    Uuid::new_v4()
}
