//! Host capabilities the frame loop depends on.
//!
//! The engine never talks to a window, canvas or terminal directly. A host
//! supplies a [`Renderer`] to draw on and a [`Scheduler`] that decides when the
//! next frame happens.

/// A drawing surface that can be cleared and painted with filled squares.
pub trait Renderer {
    /// Fills the whole surface with `background`.
    fn clear(&mut self, background: &str);

    /// Paints a `size` x `size` square of `color` with its top-left corner at
    /// pixel `(x, y)`.
    fn draw_square(&mut self, color: &str, x: i32, y: i32, size: u32);

    /// Makes everything drawn since the last `clear` visible.
    fn present(&mut self) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Decides when the next frame runs.
pub trait Scheduler {
    /// Returns once the host is ready for another frame.
    fn request_next_frame(&mut self);
}
