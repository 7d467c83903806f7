use crate::protocol::Outbound;

/// Outbound half of the real-time connection.
///
/// The connection itself (handshake, reconnects, framing) belongs to the
/// page's socket client; implementations only hand it requests.
pub trait Transport {
    fn emit(&self, message: &Outbound) -> anyhow::Result<()>;
}

impl<T> Transport for std::rc::Rc<T>
where
    T: Transport + ?Sized,
{
    fn emit(&self, message: &Outbound) -> anyhow::Result<()> {
        (**self).emit(message)
    }
}
