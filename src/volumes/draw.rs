//! Draw list for the schematic renderer

use crate::types::{DrawItem, DrawKind, PipeDescriptor};

use super::inner_string::InnerPiece;

/// Z-order given to inner-string pieces, above every pipe role.
pub const INNER_STRING_Z_ORDER: u8 = 10;

/// Contributing pipes and inner-string pieces, sorted by z-order then depth.
pub fn draw_list(pipes: &[PipeDescriptor], pieces: &[InnerPiece], tubing: bool) -> Vec<DrawItem> {
    let mut items: Vec<DrawItem> = pipes
        .iter()
        .filter(|p| p.contributes())
        .map(|p| DrawItem {
            kind: DrawKind::Pipe { role: p.role },
            id_in: p.bore_diameter(),
            od_in: p.od.filter(|d| d.is_finite()),
            top: p.top,
            bottom: p.depth,
            z_order: p.role.z_order(),
        })
        .collect();

    items.extend(pieces.iter().map(|piece| DrawItem {
        kind: if tubing {
            DrawKind::Tubing
        } else {
            DrawKind::DrillPipe {
                segment: piece.index,
            }
        },
        id_in: None,
        od_in: Some(piece.od_in),
        top: piece.top,
        bottom: piece.bottom,
        z_order: INNER_STRING_Z_ORDER,
    }));

    items.sort_by(|a, b| a.z_order.cmp(&b.z_order).then(a.top.total_cmp(&b.top)));
    items
}
