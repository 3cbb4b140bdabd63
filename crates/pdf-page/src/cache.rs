//! Single-slot, set-once memo for a Form XObject's interpreted commands
//! (interpreter design §4.8, §9 "Cached sub-command lists").

use std::cell::RefCell;
use std::rc::Rc;

use pdf_content_stream::error::PdfOperatorError;
use pdf_content_stream::form::interpret_sub_stream;
use pdf_content_stream::recording_pdf_operator_backend::RecordedOperation;

/// A PDF object's interpreter-reuse cache: at most one set, any number of
/// reads. Interpreting the same Form twice in one run must call
/// `interpret_sub_stream` only once; every later `Do` replays the stored
/// command list instead.
pub trait PdfObjectCollaborator {
    fn cached_commands(&self) -> Option<Rc<[RecordedOperation]>>;
    fn cache_commands(&self, commands: Rc<[RecordedOperation]>);

    /// Returns the cached command list for `bytes` if one has already been
    /// computed; otherwise interprets `bytes`, stores the result, and
    /// returns it. A cache miss is the only case that calls
    /// `interpret_sub_stream`.
    fn commands_or_interpret(
        &self,
        bytes: &[u8],
    ) -> Result<Rc<[RecordedOperation]>, PdfOperatorError> {
        if let Some(cached) = self.cached_commands() {
            return Ok(cached);
        }
        let commands = interpret_sub_stream(bytes)?;
        self.cache_commands(Rc::clone(&commands));
        Ok(commands)
    }
}

/// A minimal, freestanding single-slot cache, for tests and for backends
/// that don't otherwise have a place to hang the memo.
#[derive(Debug, Default)]
pub struct FormCommandCache(RefCell<Option<Rc<[RecordedOperation]>>>);

impl PdfObjectCollaborator for FormCommandCache {
    fn cached_commands(&self) -> Option<Rc<[RecordedOperation]>> {
        self.0.borrow().clone()
    }

    fn cache_commands(&self, commands: Rc<[RecordedOperation]>) {
        *self.0.borrow_mut() = Some(commands);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    /// Wraps `FormCommandCache` to count how many times the underlying
    /// stream actually gets interpreted, by intercepting the miss path.
    struct CountingCache {
        inner: FormCommandCache,
        misses: Cell<u32>,
    }

    impl CountingCache {
        fn new() -> Self {
            Self {
                inner: FormCommandCache::default(),
                misses: Cell::new(0),
            }
        }

        fn commands_or_interpret(
            &self,
            bytes: &[u8],
        ) -> Result<Rc<[RecordedOperation]>, PdfOperatorError> {
            if let Some(cached) = self.inner.cached_commands() {
                return Ok(cached);
            }
            self.misses.set(self.misses.get() + 1);
            self.inner.commands_or_interpret(bytes)
        }
    }

    #[test]
    fn cache_hit_does_not_reinterpret() {
        let cache = CountingCache::new();
        let bytes: &[u8] = b"0 0 1 1 re f";

        let first = cache.commands_or_interpret(bytes).unwrap();
        let second = cache.commands_or_interpret(bytes).unwrap();

        assert_eq!(first, second);
        assert_eq!(cache.misses.get(), 1);
    }

    #[test]
    fn empty_cache_reports_no_cached_commands() {
        let cache = FormCommandCache::default();
        assert!(cache.cached_commands().is_none());
    }
}
