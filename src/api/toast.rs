use std::borrow::Cow;
use std::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastVariant {
    Default,
    Destructive,
}

/// Transient user-facing notice emitted after a mutating operation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Toast {
    pub title: Cow<'static, str>,
    pub description: Option<Cow<'static, str>>,
    pub variant: ToastVariant,
}

impl Toast {
    pub fn ok<M>(title: M) -> Self
    where
        M: Into<Cow<'static, str>>,
    {
        Self { title: title.into(), description: None, variant: ToastVariant::Default }
    }

    pub fn destructive<M>(title: M) -> Self
    where
        M: Into<Cow<'static, str>>,
    {
        Self { title: title.into(), description: None, variant: ToastVariant::Destructive }
    }

    pub fn description<M>(mut self, msg: M) -> Self
    where
        M: Into<Cow<'static, str>>,
    {
        self.description = Some(msg.into());
        self
    }
}

pub trait ToastSink {
    fn emit(&self, toast: Toast);
}

/// Writes toasts to the log; used when no UI is attached.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogToastSink;

impl ToastSink for LogToastSink {
    fn emit(&self, toast: Toast) {
        let description = toast.description.as_deref().unwrap_or("");
        match toast.variant {
            ToastVariant::Default => log::info!("[toast] {}: {}", toast.title, description),
            ToastVariant::Destructive => log::warn!("[toast] {}: {}", toast.title, description),
        }
    }
}

#[derive(Debug, Default)]
pub struct RecordingToastSink {
    toasts: Mutex<Vec<Toast>>,
}

impl RecordingToastSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.lock().map(|t| t.clone()).unwrap_or_default()
    }

    pub fn titles(&self) -> Vec<String> {
        self.toasts().into_iter().map(|t| t.title.into_owned()).collect()
    }

    pub fn last(&self) -> Option<Toast> {
        self.toasts().pop()
    }
}

impl ToastSink for RecordingToastSink {
    fn emit(&self, toast: Toast) {
        if let Ok(mut toasts) = self.toasts.lock() {
            toasts.push(toast);
        }
    }
}
