use crate::domain::model::{ConversionState, Record};
use crate::idf::SharedDocument;
use tracing::Span;

/// Lifecycle shared by every concrete converter: the document handle, the raw
/// payload, a logging span and the running counters.
#[derive(Debug)]
pub struct BaseConverter {
    name: &'static str,
    idf: SharedDocument,
    data: Record,
    state: ConversionState,
    span: Span,
}

impl BaseConverter {
    pub fn new(name: &'static str, idf: SharedDocument, data: Record) -> Self {
        Self {
            name,
            idf,
            data,
            state: ConversionState::default(),
            span: tracing::info_span!("converter", converter = name),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// 只能透過這個 handle 追加物件，不可替換
    pub fn idf(&self) -> &SharedDocument {
        &self.idf
    }

    pub fn data(&self) -> &Record {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut Record {
        &mut self.data
    }

    pub fn logger(&self) -> &Span {
        &self.span
    }

    pub fn state(&self) -> ConversionState {
        self.state
    }

    pub fn record(&mut self, delta: ConversionState) -> ConversionState {
        self.state += delta;
        delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::idf::IdfDocument;
    use std::rc::Rc;

    #[test]
    fn test_counters_accumulate() {
        let idf = IdfDocument::shared("9.4");
        let mut base = BaseConverter::new("test", Rc::clone(&idf), Record::new());

        base.record(ConversionState::one_success());
        let delta = base.record(ConversionState::one_failure());

        assert_eq!(delta, ConversionState::one_failure());
        assert_eq!(base.state(), ConversionState { success: 1, failed: 1 });
        assert!(Rc::ptr_eq(base.idf(), &idf));
    }
}
