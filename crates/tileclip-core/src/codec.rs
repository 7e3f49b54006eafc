//! Text form of the user-editable flags of a primitive, as stored next to a
//! saved scene: `clipping (OFF-inv-infl0-infl2-)`.

use std::fmt::Write;

use crate::model::ModelKind;
use crate::primitive::ClippingPrimitiveInfo;

const PREFIX: &str = "clipping";

/// Encodes enabled, inverted and the full-type influences of `info`.
pub fn encode_properties(info: &ClippingPrimitiveInfo) -> String {
    let mut out = format!("{PREFIX} (");
    if !info.is_enabled() {
        out.push_str("OFF-");
    }
    if info.inverted() {
        out.push_str("inv-");
    }
    for kind in ModelKind::ALL {
        if info.should_influence_full_model_type(kind) {
            let _ = write!(out, "infl{}-", kind.code());
        }
    }
    out.push(')');
    out
}

/// Applies a string produced by [`encode_properties`] to `info`.
///
/// Returns false, leaving `info` untouched, when `encoded` is not a clipping
/// property string.
pub fn decode_properties(encoded: &str, info: &mut ClippingPrimitiveInfo) -> bool {
    if !encoded.starts_with(PREFIX) {
        return false;
    }
    info.set_enabled(!encoded.contains("OFF-"));
    info.set_inverted(encoded.contains("inv-"));
    for kind in ModelKind::ALL {
        let token = format!("infl{}-", kind.code());
        info.set_influence_full_model_type(kind, encoded.contains(&token));
    }
    true
}
