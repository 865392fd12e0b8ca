pub mod utc_day;
