/// Frame-cadence source of vertical scroll offsets.
///
/// The host's animation-frame loop calls [`ScrollSource::raf`] once per frame; a returned offset
/// is a scroll event to deliver to subscribers this frame.
pub trait ScrollSource {
    /// Arm the substrate. Re-arms a disposed substrate.
    fn start(&mut self);

    /// Advance one animation frame at `time_ms` and report the offset if a scroll event fires.
    ///
    /// Returns `None` once disposed.
    fn raf(&mut self, time_ms: f64) -> Option<f64>;

    /// Current offset without advancing.
    fn offset(&self) -> f64;

    /// Whether frames are being accepted.
    fn is_active(&self) -> bool;

    /// Stop accepting frames and release the substrate. Idempotent.
    fn dispose(&mut self);
}

impl<S: ScrollSource + ?Sized> ScrollSource for Box<S> {
    fn start(&mut self) {
        (**self).start()
    }

    fn raf(&mut self, time_ms: f64) -> Option<f64> {
        (**self).raf(time_ms)
    }

    fn offset(&self) -> f64 {
        (**self).offset()
    }

    fn is_active(&self) -> bool {
        (**self).is_active()
    }

    fn dispose(&mut self) {
        (**self).dispose()
    }
}
