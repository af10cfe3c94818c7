pub mod celery;
pub mod record;

pub use celery::parse_record;
pub use record::TaskRecord;
