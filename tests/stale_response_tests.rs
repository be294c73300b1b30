//! Out-of-order response handling: the later-issued fetch must win even
//! when an earlier in-flight request resolves after it.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use langvar_picker::application::picker::Picker;
use langvar_picker::domain::error::PickerError;
use langvar_picker::domain::model::{Suggestion, Translation};
use langvar_picker::domain::traits::SuggestService;

struct Scripted {
    delay_ms: u64,
    uid: String,
}

/// Each query resolves after its scripted delay with a single marker item.
struct SlowService {
    script: HashMap<String, Scripted>,
    calls: Mutex<Vec<String>>,
}

impl SlowService {
    fn new(script: &[(&str, u64, &str)]) -> Arc<Self> {
        Arc::new(Self {
            script: script
                .iter()
                .map(|(txt, delay_ms, uid)| {
                    (
                        txt.to_string(),
                        Scripted {
                            delay_ms: *delay_ms,
                            uid: uid.to_string(),
                        },
                    )
                })
                .collect(),
            calls: Mutex::new(Vec::new()),
        })
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SuggestService for SlowService {
    async fn suggest(&self, txt: &str) -> Result<Vec<Suggestion>, PickerError> {
        self.calls.lock().unwrap().push(txt.to_string());
        let (delay, uid) = match self.script.get(txt) {
            Some(s) => (Duration::from_millis(s.delay_ms), s.uid.clone()),
            None => (Duration::ZERO, "und-000".to_string()),
        };
        tokio::time::sleep(delay).await;
        Ok(vec![Suggestion {
            id: "1".to_string(),
            uid,
            trans: vec![Translation {
                txt: txt.to_string(),
            }],
        }])
    }
}

async fn settle() {
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}

#[tokio::test(start_paused = true)]
async fn later_issued_fetch_wins_over_slow_earlier_one() {
    // "slow" is issued first and resolves last; "fast" supersedes it
    let service = SlowService::new(&[("slow", 1000, "slo-000"), ("fast", 10, "fas-000")]);
    let picker = Picker::new(service.clone());

    // t=0: keystroke; fetch issued at t=500, resolving at t=1500
    picker.input("slow");
    tokio::task::yield_now().await;
    tokio::time::advance(Duration::from_millis(501)).await;
    settle().await;

    // Next keystroke lands outside the window, so the in-flight
    // request is not cancelled; a second fetch is issued after it
    tokio::time::advance(Duration::from_millis(100)).await;
    picker.input("fast");
    tokio::task::yield_now().await;
    tokio::time::advance(Duration::from_millis(520)).await;
    settle().await;
    tokio::time::advance(Duration::from_millis(20)).await;
    settle().await;

    // The later-issued response has rendered; the slow one is in flight
    assert_eq!(service.calls(), vec!["slow".to_string(), "fast".to_string()]);
    let items = picker.suggestions();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].uid, "fas-000");

    // The slow response finally resolves and must be discarded
    tokio::time::advance(Duration::from_millis(1200)).await;
    settle().await;
    let items = picker.suggestions();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].uid, "fas-000");
}

#[tokio::test(start_paused = true)]
async fn cancelled_debounce_never_issues_its_fetch() {
    let service = SlowService::new(&[("ab", 10, "abc-000")]);
    let picker = Picker::new(service.clone());

    picker.input("a");
    tokio::task::yield_now().await;
    tokio::time::advance(Duration::from_millis(100)).await;
    picker.input("ab");
    tokio::task::yield_now().await;
    tokio::time::advance(Duration::from_millis(600)).await;
    settle().await;
    tokio::time::advance(Duration::from_millis(20)).await;
    settle().await;

    // The superseded keystroke's fetch was aborted before firing
    assert_eq!(service.calls(), vec!["ab".to_string()]);
    assert_eq!(picker.suggestions()[0].uid, "abc-000");
}
