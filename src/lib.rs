pub mod document;
pub mod tokenizer;
pub mod parser;
pub mod layout;
pub mod phrase;
pub mod extract;
pub mod event;
pub mod overlay;
pub mod config;
pub mod dispatcher;

// Export document model
pub use document::{Document, NodeId, NodeKind, UnitClass};

// Export tokenizer and loading
pub use tokenizer::{segment, segment_document, Fragment, SegmentStats};
pub use parser::{parse_plain_text, load_document};

// Export host interface
pub use layout::{LayoutHost, MonospaceLayout};
pub use event::{EventKind, HostEvent, PointerTarget};

// Export phrase assembly
pub use phrase::{resolve, PhraseWindow};
pub use extract::{extract, PhraseExtract};

// Export overlay control
pub use overlay::{HideTimer, OverlayController, OverlayPhase, OverlayState, TimerState};
pub use config::MagnifierConfig;
pub use dispatcher::{HoverTracking, Magnifier, SUBSCRIPTIONS};
