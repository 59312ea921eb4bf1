#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Host finished setting up; load the front page.
    Mounted,
    /// Periodic refresh timer fired.
    RefreshTick,
    /// User replaced the search text.
    InputChanged(String),
    /// User typed a single character into the search box.
    InputChar(char),
    /// User deleted the last character of the search box.
    InputBackspace,
    /// User submitted the search box.
    SearchSubmitted,
    /// User closed the error banner.
    ErrorDismissed,
    /// User asked for the default front-page view.
    HomeClicked,
    /// User picked a page from the pagination control.
    PageSelected(usize),
    NextPage,
    PreviousPage,
    /// Engine finished a request. `Err` carries a human readable message.
    FetchCompleted {
        request_id: crate::RequestId,
        result: Result<Vec<crate::Story>, String>,
    },
    /// Host is tearing down.
    Unmounted,
}
