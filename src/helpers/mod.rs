pub mod random_dates;
pub mod terminal;
