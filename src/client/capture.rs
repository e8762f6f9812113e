use crate::prelude::*;

/// Packet capture, mirroring traffic of chosen interfaces to a sink node.
#[derive(Clone, Copy)]
pub struct Capture<'a> {
    legacy: &'a dyn LegacyClient,
}

impl<'a> Capture<'a> {
    pub(crate) fn new(legacy: &'a dyn LegacyClient) -> Self {
        Self { legacy }
    }

    pub fn start(
        &self,
        ctx: &Context,
        capture: &CaptureStart,
        opts: &[CallOption],
    ) -> DpResult<CaptureStart> {
        self.legacy
            .capture_start(ctx, capture, &to_legacy_ignored(opts))
    }

    pub fn stop(&self, ctx: &Context, opts: &[CallOption]) -> DpResult<CaptureStop> {
        self.legacy.capture_stop(ctx, &to_legacy_ignored(opts))
    }

    pub fn status(&self, ctx: &Context, opts: &[CallOption]) -> DpResult<CaptureStatus> {
        self.legacy.capture_status(ctx, &to_legacy_ignored(opts))
    }
}
