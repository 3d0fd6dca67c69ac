use log::debug;
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread;

use crate::api::{FetchError, StatisticsSource};
use crate::models::{Period, StatisticsSnapshot};
use crate::tui::events::Event;

/// Identifies one load request. Only the most recently issued ticket may
/// update the screen; anything older is a superseded response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    pub seq: u64,
    pub period: Period,
}

#[derive(Debug)]
pub struct FetchOutcome {
    pub ticket: RequestTicket,
    pub result: Result<StatisticsSnapshot, FetchError>,
}

/// Run `source.fetch` off the UI thread and post the outcome back.
pub fn spawn_fetch(source: Arc<dyn StatisticsSource>, ticket: RequestTicket, tx: Sender<Event>) {
    thread::spawn(move || {
        debug!(
            "Fetch #{} ({}) started via {}",
            ticket.seq,
            ticket.period,
            source.name()
        );
        let result = source.fetch(ticket.period);
        // Receiver gone means the UI already exited
        let _ = tx.send(Event::Fetched(FetchOutcome { ticket, result }));
    });
}
