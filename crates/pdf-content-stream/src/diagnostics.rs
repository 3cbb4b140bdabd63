//! A minimal, host-provided diagnostics channel.
//!
//! The interpreter never writes to stderr on its own initiative. Instead it
//! reports downgraded-to-warning conditions (an unknown operator inside
//! `BX…EX`, a failed shading or XObject lookup, operand-stack hygiene
//! violations) through a [`DiagnosticSink`] the host supplies. A host that
//! does not care can use [`NullDiagnosticSink`], which drops everything at
//! zero cost.

/// Severity of a single diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DiagnosticLevel {
    Warn,
    Info,
    Debug,
}

/// A sink that receives diagnostic messages from the interpreter.
pub trait DiagnosticSink {
    fn log(&mut self, level: DiagnosticLevel, message: &str);
}

/// A [`DiagnosticSink`] that discards every message. The default for hosts
/// that don't want diagnostic output.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullDiagnosticSink;

impl DiagnosticSink for NullDiagnosticSink {
    fn log(&mut self, _level: DiagnosticLevel, _message: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    struct RecordingSink {
        messages: Vec<(DiagnosticLevel, String)>,
    }

    impl DiagnosticSink for RecordingSink {
        fn log(&mut self, level: DiagnosticLevel, message: &str) {
            self.messages.push((level, message.to_string()));
        }
    }

    #[test]
    fn null_sink_drops_everything() {
        let mut sink = NullDiagnosticSink;
        sink.log(DiagnosticLevel::Warn, "unknown operator");
    }

    #[test]
    fn recording_sink_keeps_level_and_message() {
        let mut sink = RecordingSink { messages: Vec::new() };
        sink.log(DiagnosticLevel::Warn, "unknown operator 'Zz'");
        assert_eq!(
            sink.messages,
            vec![(DiagnosticLevel::Warn, "unknown operator 'Zz'".to_string())]
        );
    }
}
