//! Calendar and inbox lookups.
//!
//! Each lookup returns the journal note for a period, creating it on the
//! server if it does not exist yet.

use reqwest::Method;

use crate::client::TriliumClient;
use crate::error::Result;
use crate::request::RequestBody;
use crate::types::Note;

/// Provides access to calendar ETAPI operations.
///
/// Obtained via [`TriliumClient::calendar()`].
///
/// # Example
///
/// ```no_run
/// # use pytrilium::TriliumClient;
/// # async fn example(client: TriliumClient) -> pytrilium::Result<()> {
/// let today = client.calendar().day("2024-03-01").await?;
/// let month = client.calendar().month("2024-03").await?;
/// println!("{} is under {}", today.title, month.title);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct CalendarActions<'a> {
    pub(crate) client: &'a TriliumClient,
}

impl<'a> CalendarActions<'a> {
    /// Day note for a `YYYY-MM-DD` date.
    pub async fn day(&self, date: &str) -> Result<Note> {
        self.note(&format!("/calendar/days/{date}")).await
    }

    /// Week note for the week containing a `YYYY-MM-DD` date.
    pub async fn week(&self, date: &str) -> Result<Note> {
        self.note(&format!("/calendar/weeks/{date}")).await
    }

    /// Month note for a `YYYY-MM` month.
    pub async fn month(&self, month: &str) -> Result<Note> {
        self.note(&format!("/calendar/months/{month}")).await
    }

    /// Year note for a `YYYY` year.
    pub async fn year(&self, year: &str) -> Result<Note> {
        self.note(&format!("/calendar/years/{year}")).await
    }

    /// Inbox note for a `YYYY-MM-DD` date.
    ///
    /// This is the fixed inbox note when one is configured, the day note
    /// otherwise.
    pub async fn inbox(&self, date: &str) -> Result<Note> {
        self.note(&format!("/inbox/{date}")).await
    }

    async fn note(&self, endpoint: &str) -> Result<Note> {
        self.client
            .invoke(Method::GET, endpoint, RequestBody::Empty, &[])
            .await
    }
}
