//! Delivery of scanned tags while reader mode is registered

use tracing::{debug, warn};

use crate::{
    bridge::{NativeError, ResultStream},
    tag::ScannedTag,
};

/// Implemented by the host, receives every tag the native reader discovers
#[uniffi::export(callback_interface)]
pub trait TagListener: Send + Sync + std::fmt::Debug + 'static {
    fn on_tag(&self, tag: ScannedTag);

    /// A native error payload, or the reason a tag payload could not be parsed
    fn on_error(&self, message: String);
}

/// Forward every result on `stream` to `listener` until the native side
/// releases the callback
pub(crate) async fn forward_tags(
    stream: ResultStream,
    listener: Box<dyn TagListener>,
    log_payloads: bool,
) {
    while let Some(result) = stream.next().await {
        let payload = match result {
            Ok(payload) => payload,
            Err(NativeError::Rejected(payload)) => {
                debug!("reader mode callback reported an error");
                listener.on_error(payload);
                continue;
            }
            Err(error) => {
                listener.on_error(error.to_string());
                continue;
            }
        };

        if log_payloads {
            debug!(%payload, "tag discovered");
        } else {
            debug!("tag discovered");
        }

        match ScannedTag::from_json(&payload) {
            Ok(tag) => listener.on_tag(tag),
            Err(error) => {
                warn!(%error, "unable to parse scanned tag");
                listener.on_error(error.to_string());
            }
        }
    }

    debug!("reader mode callback released, no more tags");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{bridge::InvokeCallback, scanner::ScannerMethod};
    use pretty_assertions::assert_eq;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Event {
        Tag(Vec<u8>),
        Error(String),
    }

    #[derive(Debug)]
    struct Listener(flume::Sender<Event>);

    impl TagListener for Listener {
        fn on_tag(&self, tag: ScannedTag) {
            let _ = self.0.send(Event::Tag(tag.id));
        }

        fn on_error(&self, message: String) {
            let _ = self.0.send(Event::Error(message));
        }
    }

    #[tokio::test]
    async fn test_forwards_until_released() {
        let method = ScannerMethod::RegisterReaderModeCallback;
        let (callback, stream) = InvokeCallback::repeating(method);
        let (sender, events) = flume::unbounded();

        callback.success(r#"{"id": [1]}"#.to_string());
        callback.error("tag was lost".to_string());
        callback.success("not json".to_string());
        callback.success(r#"{"id": [-1, 2], "techTypes": ["NfcA"]}"#.to_string());
        drop(callback);

        forward_tags(stream, Box::new(Listener(sender)), true).await;

        let events = events.drain().collect::<Vec<_>>();
        assert_eq!(events.len(), 4);
        assert_eq!(events[0], Event::Tag(vec![1]));
        assert_eq!(events[1], Event::Error("tag was lost".to_string()));
        assert!(matches!(&events[2], Event::Error(error) if error.starts_with("invalid tag json")));
        assert_eq!(events[3], Event::Tag(vec![0xFF, 0x02]));
    }
}
