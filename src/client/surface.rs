use crate::view::ChatLine;
use crate::view::Frame;

/// Rendering adapter: applies view models to whatever is on screen.
pub trait Surface {
    /// Redraws every region from the frame. Regions the frame leaves as
    /// `None` are not touched.
    fn paint(&mut self, frame: &Frame) -> anyhow::Result<()>;
    /// Appends a chat bubble and keeps the transcript scrolled to it.
    fn chat(&mut self, line: &ChatLine) -> anyhow::Result<()>;
    /// Blocking notice for errors reported by the server.
    fn alert(&mut self, message: &str);
    /// Short-lived notice for problems on this side of the wire.
    fn toast(&mut self, message: &str);
    /// The transport reported a (re)connection.
    fn connected(&mut self) {}
}
