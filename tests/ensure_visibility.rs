use twin_logger::{
    writers::{BufferSink, ConsoleSink, ConsoleTarget, LogSink, RotatingFileSink, SinkKind},
    DeferredNow, EntryTracer, FileSpec, FnIdentity, FormatFunction, Location, Logger,
    LoggerHandle, LoggerRegistry, Outcome, Rotation, RunOutcome, Severity, SinkConfig,
    TraceEvent, Traced, TracedEntry, Tracer, TwinLoggerError, WriteMode,
};

#[allow(dead_code)]
#[test]
fn ensure_visibility() {
    let _: Option<(
        BufferSink,
        ConsoleSink,
        ConsoleTarget,
        Box<dyn LogSink>,
        RotatingFileSink,
        SinkKind,
        DeferredNow,
        EntryTracer,
        FileSpec,
        FnIdentity,
        FormatFunction,
    )> = None;
    let _: Option<(Location, Logger, LoggerHandle, LoggerRegistry, Rotation)> = None;
    let _: Option<(RunOutcome<()>, Severity, SinkConfig, TraceEvent, Traced<fn()>)> = None;
    let _: Option<(TracedEntry<fn()>, Tracer, TwinLoggerError, WriteMode)> = None;
    fn _outcome<O: Outcome>(_: O) {}
    _outcome(());
}
