//! Hand outbound links (`https://wa.me/…`, `mailto:`, `tel:`) to the
//! platform's default handler.

use std::io;

/// Open a URL with the default browser / mail client / dialler.
///
/// The link is passed as a single argument, so the `&` between mailto
/// `subject` and `body` survives the Windows shell.
pub fn open_url(url: &str) -> io::Result<()> {
    tracing::debug!(scheme = url.split(':').next().unwrap_or_default(), "opening link");
    open::that_detached(url)
}
