use crate::events::BusEvent;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    ScheduleSearch { seq: u64, query: String },
    CancelSearch,
    Search { seq: u64, query: String },
    RunScheduler,
    Publish(BusEvent),
}
