// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer orchestrates all the other layers to accomplish
// the one job of this tool: preparing the encoded dataset.
//
// Rules for this layer:
//   - No tokenization or parsing logic here
//   - No UI or printing here (that's Layer 1)
//   - No direct file-format knowledge (that's Layer 4 and 6)
//   - Only workflow coordination
//
// Think of this layer as the "director" — it tells other
// layers what to do but doesn't do the work itself.
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// The dataset preparation workflow
pub mod prepare_use_case;
