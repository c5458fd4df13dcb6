//! Layout model for the viewer's on-screen panels.

use taffy::TaffyTree;
use taffy::prelude::*;

const SIDEBAR_WIDTH: f32 = 260.0;
const GAP: f32 = 20.0;

pub struct LayoutNodes {
    root: NodeId,
    status: NodeId,
    main_row: NodeId,
    sidebar: NodeId,
    map: NodeId,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

pub struct FrameLayout {
    pub status: PanelRect,
    pub sidebar: PanelRect,
    pub map: PanelRect,
}

pub fn setup_layout(taffy: &mut TaffyTree<()>, ui_scale: f32) -> LayoutNodes {
    let status = taffy
        .new_leaf(Style {
            size: Size { width: percent(1.0), height: length(40.0 * ui_scale) },
            margin: taffy::Rect { left: zero(), right: zero(), top: zero(), bottom: length(GAP) },
            flex_shrink: 0.0,
            ..Default::default()
        })
        .expect("status node");
    let sidebar = taffy
        .new_leaf(Style {
            size: Size { width: length(SIDEBAR_WIDTH * ui_scale), height: auto() },
            margin: taffy::Rect { left: zero(), right: length(GAP), top: zero(), bottom: zero() },
            flex_shrink: 0.0,
            ..Default::default()
        })
        .expect("sidebar node");
    let map = taffy.new_leaf(Style { flex_grow: 1.0, ..Default::default() }).expect("map node");
    let main_row = taffy
        .new_with_children(
            Style {
                display: Display::Flex,
                flex_direction: FlexDirection::Row,
                flex_grow: 1.0,
                ..Default::default()
            },
            &[sidebar, map],
        )
        .expect("main row node");
    let root = taffy
        .new_with_children(
            Style {
                display: Display::Flex,
                flex_direction: FlexDirection::Column,
                size: Size { width: percent(1.0), height: percent(1.0) },
                padding: taffy::Rect {
                    left: length(GAP),
                    right: length(GAP),
                    top: length(GAP),
                    bottom: length(GAP),
                },
                ..Default::default()
            },
            &[status, main_row],
        )
        .expect("root node");
    LayoutNodes { root, status, main_row, sidebar, map }
}

pub fn compute_frame_layout(
    taffy: &mut TaffyTree<()>,
    nodes: &LayoutNodes,
    viewport_width: f32,
    viewport_height: f32,
) -> FrameLayout {
    let available_size = Size {
        width: AvailableSpace::Definite(viewport_width),
        height: AvailableSpace::Definite(viewport_height),
    };
    taffy.compute_layout(nodes.root, available_size).expect("compute layout");

    let l_root = taffy.layout(nodes.root).expect("root layout");
    let l_status = taffy.layout(nodes.status).expect("status layout");
    let l_main = taffy.layout(nodes.main_row).expect("main layout");
    let l_sidebar = taffy.layout(nodes.sidebar).expect("sidebar layout");
    let l_map = taffy.layout(nodes.map).expect("map layout");

    FrameLayout {
        status: panel_rect(l_status, &[l_root]),
        sidebar: panel_rect(l_sidebar, &[l_root, l_main]),
        map: panel_rect(l_map, &[l_root, l_main]),
    }
}

fn panel_rect(layout: &taffy::Layout, parents: &[&taffy::Layout]) -> PanelRect {
    let mut x = layout.location.x;
    let mut y = layout.location.y;
    for parent in parents {
        x += parent.location.x;
        y += parent.location.y;
    }

    PanelRect { x, y, width: layout.size.width, height: layout.size.height }
}
