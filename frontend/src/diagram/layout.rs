use std::collections::HashMap;

use thiserror::Error;

use super::wrap::{wrap_diamond, TitleMetrics};

/// Two node centers closer than this on x count as the same column.
pub const SAME_COLUMN_EPSILON: f64 = 0.001;

#[derive(Debug, Error, PartialEq)]
pub enum DiagramError {
    #[error("edge {edge} references unknown node `{id}`")]
    UnknownNode { edge: usize, id: String },
    #[error("node `{0}` is defined more than once")]
    DuplicateNode(String),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

/// Board geometry: outer padding, the grid every node snaps to, the corner
/// radius of rectangle nodes and a global scale applied to node sizes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Board {
    pub pad: f64,
    pub cols: u32,
    pub rows: u32,
    pub col_w: f64,
    pub row_h: f64,
    pub corner_radius: f64,
    pub scale: f64,
}

impl Default for Board {
    fn default() -> Self {
        Board {
            pad: 28.0,
            cols: 3,
            rows: 9,
            col_w: 250.0,
            row_h: 92.0,
            corner_radius: 18.0,
            scale: 0.85,
        }
    }
}

impl Board {
    pub fn width(&self) -> f64 {
        self.pad * 2.0 + self.cols as f64 * self.col_w
    }

    pub fn height(&self) -> f64 {
        self.pad * 2.0 + self.rows as f64 * self.row_h
    }

    /// Nominal center of a grid cell.
    pub fn cell_center(&self, col: u32, row: u32) -> Point {
        Point {
            x: self.pad + col as f64 * self.col_w + self.col_w / 2.0,
            y: self.pad + row as f64 * self.row_h + self.row_h / 2.0,
        }
    }

    /// Top edge of a grid row.
    pub fn row_top(&self, row: u32) -> f64 {
        self.cell_center(0, row).y - self.row_h / 2.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    pub rect_w: f64,
    pub rect_h: f64,
    pub diamond: f64,
    pub stroke_width: f64,
    pub arrow_tip_h: f64,
    pub arrow_tip_w: f64,
    /// Gap left between a connector's end and the destination border; the
    /// arrowhead fills it.
    pub arrow_clearance: f64,
    /// How far above the shared destination collector edges turn.
    pub collector_gap: f64,
    pub label_dy: f64,
    pub diamond_title_dx: f64,
    pub diamond_title_dy: f64,
}

impl Default for Style {
    fn default() -> Self {
        Style {
            rect_w: 210.0,
            rect_h: 56.0,
            diamond: 74.0,
            stroke_width: 2.25,
            arrow_tip_h: 8.0,
            arrow_tip_w: 6.0,
            arrow_clearance: 8.0,
            collector_gap: 24.0,
            label_dy: -8.0,
            diamond_title_dx: 0.0,
            diamond_title_dy: 3.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Rect,
    Diamond,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NodeSpec {
    pub id: String,
    pub shape: Shape,
    pub col: u32,
    pub row: u32,
    pub title: String,
    pub subtitle: Option<String>,
    pub w: Option<f64>,
    pub h: Option<f64>,
    pub dx: f64,
    pub dy: f64,
    pub scale: Option<f64>,
    pub title_lines: Option<Vec<String>>,
    pub title_dx: f64,
    pub title_dy: f64,
}

impl NodeSpec {
    fn new(id: &str, shape: Shape, col: u32, row: u32, title: &str) -> Self {
        NodeSpec {
            id: id.to_string(),
            shape,
            col,
            row,
            title: title.to_string(),
            subtitle: None,
            w: None,
            h: None,
            dx: 0.0,
            dy: 0.0,
            scale: None,
            title_lines: None,
            title_dx: 0.0,
            title_dy: 0.0,
        }
    }

    pub fn rect(id: &str, col: u32, row: u32, title: &str) -> Self {
        Self::new(id, Shape::Rect, col, row, title)
    }

    pub fn diamond(id: &str, col: u32, row: u32, title: &str) -> Self {
        Self::new(id, Shape::Diamond, col, row, title)
    }

    pub fn sub(mut self, subtitle: &str) -> Self {
        self.subtitle = Some(subtitle.to_string());
        self
    }

    pub fn width(mut self, w: f64) -> Self {
        self.w = Some(w);
        self
    }

    pub fn height(mut self, h: f64) -> Self {
        self.h = Some(h);
        self
    }

    pub fn offset(mut self, dx: f64, dy: f64) -> Self {
        self.dx = dx;
        self.dy = dy;
        self
    }

    pub fn scaled(mut self, scale: f64) -> Self {
        self.scale = Some(scale);
        self
    }

    /// Pre-wrapped diamond title, bypassing the word wrapper.
    pub fn lines(mut self, lines: &[&str]) -> Self {
        self.title_lines = Some(lines.iter().map(|l| l.to_string()).collect());
        self
    }

    pub fn title_offset(mut self, dx: f64, dy: f64) -> Self {
        self.title_dx = dx;
        self.title_dy = dy;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Routing {
    /// Down from the source's bottom to the bend, across, then down into the target.
    Vh,
    /// Out of the source's right side to the midpoint, down to the bend,
    /// across, then down into the target.
    Hvh,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bend {
    /// Halfway between the two centers.
    Midpoint,
    At(f64),
    /// Just above the destination, shared by every edge into it.
    Collector,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EdgeLabel {
    pub text: String,
    pub at: f64,
    pub dx: f64,
    pub dy: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EdgeSpec {
    pub from: String,
    pub to: String,
    pub routing: Routing,
    pub bend: Bend,
    pub label: Option<EdgeLabel>,
}

impl EdgeSpec {
    pub fn new(from: &str, to: &str) -> Self {
        EdgeSpec {
            from: from.to_string(),
            to: to.to_string(),
            routing: Routing::Vh,
            bend: Bend::Midpoint,
            label: None,
        }
    }

    pub fn hvh(mut self) -> Self {
        self.routing = Routing::Hvh;
        self
    }

    pub fn bend_at(mut self, y: f64) -> Self {
        self.bend = Bend::At(y);
        self
    }

    pub fn collector(mut self) -> Self {
        self.bend = Bend::Collector;
        self
    }

    pub fn label(mut self, text: &str, at: f64) -> Self {
        self.label = Some(EdgeLabel { text: text.to_string(), at, dx: 0.0, dy: None });
        self
    }

    pub fn label_offset(mut self, dx: f64, dy: f64) -> Self {
        if let Some(label) = self.label.as_mut() {
            label.dx = dx;
            label.dy = Some(dy);
        }
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextRole {
    Title,
    Subtitle,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub text: String,
    pub at: Point,
    pub font_size: f64,
    pub role: TextRole,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedNode {
    pub id: String,
    pub shape: Shape,
    pub center: Point,
    pub w: f64,
    pub h: f64,
    pub corner_radius: f64,
    pub text: Vec<TextLine>,
}

impl PlacedNode {
    pub fn top(&self) -> Point {
        Point::new(self.center.x, self.center.y - self.h / 2.0)
    }

    pub fn bottom(&self) -> Point {
        Point::new(self.center.x, self.center.y + self.h / 2.0)
    }

    pub fn right(&self) -> Point {
        Point::new(self.center.x + self.w / 2.0, self.center.y)
    }

    /// Outline corners of a diamond, clockwise from the top.
    pub fn diamond_points(&self) -> [Point; 4] {
        let half = self.w / 2.0;
        let c = self.center;
        [
            Point::new(c.x, c.y - half),
            Point::new(c.x + half, c.y),
            Point::new(c.x, c.y + half),
            Point::new(c.x - half, c.y),
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Connector {
    /// Filled vertical bar between nodes sharing a column.
    Shaft { x: f64, y: f64, width: f64, height: f64 },
    /// Stroked orthogonal polyline.
    Path { points: Vec<Point> },
}

/// Solid triangle whose tip touches the destination's top-center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowHead {
    pub tip: Point,
    pub half_width: f64,
    pub height: f64,
}

impl ArrowHead {
    pub fn points(&self) -> [Point; 3] {
        [
            Point::new(self.tip.x - self.half_width, self.tip.y - self.height),
            Point::new(self.tip.x + self.half_width, self.tip.y - self.height),
            self.tip,
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLabel {
    pub text: String,
    pub at: Point,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoutedEdge {
    pub from: String,
    pub to: String,
    pub connector: Connector,
    pub arrow: ArrowHead,
    pub label: Option<PlacedLabel>,
}

/// A single drawable item, in paint order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive<'a> {
    Connector(usize, &'a RoutedEdge),
    Node(usize, &'a PlacedNode),
    Label(&'a PlacedLabel),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub width: f64,
    pub height: f64,
    pub stroke_width: f64,
    pub nodes: Vec<PlacedNode>,
    pub edges: Vec<RoutedEdge>,
}

impl Layout {
    /// Shafts, then routed paths, then nodes, then labels: connectors always
    /// sit behind the shapes they join.
    pub fn primitives(&self) -> Vec<Primitive<'_>> {
        let shafts = self
            .edges
            .iter()
            .enumerate()
            .filter(|(_, e)| matches!(e.connector, Connector::Shaft { .. }));
        let paths = self
            .edges
            .iter()
            .enumerate()
            .filter(|(_, e)| matches!(e.connector, Connector::Path { .. }));

        let mut out: Vec<Primitive<'_>> = shafts
            .chain(paths)
            .map(|(i, e)| Primitive::Connector(i, e))
            .collect();
        out.extend(self.nodes.iter().enumerate().map(|(i, n)| Primitive::Node(i, n)));
        out.extend(self.edges.iter().filter_map(|e| e.label.as_ref()).map(Primitive::Label));
        out
    }

    #[cfg(test)]
    pub fn node(&self, id: &str) -> Option<&PlacedNode> {
        self.nodes.iter().find(|n| n.id == id)
    }
}

/// Maps a grid-based node/edge description to absolute geometry.
pub fn layout(
    board: &Board,
    style: &Style,
    nodes: &[NodeSpec],
    edges: &[EdgeSpec],
) -> Result<Layout, DiagramError> {
    let mut placed = Vec::with_capacity(nodes.len());
    let mut by_id: HashMap<&str, usize> = HashMap::with_capacity(nodes.len());

    for spec in nodes {
        if by_id.insert(spec.id.as_str(), placed.len()).is_some() {
            return Err(DiagramError::DuplicateNode(spec.id.clone()));
        }
        placed.push(place_node(board, style, spec));
    }

    let mut routed = Vec::with_capacity(edges.len());
    for (index, edge) in edges.iter().enumerate() {
        let lookup = |id: &str| {
            by_id.get(id).map(|&i| &placed[i]).ok_or_else(|| DiagramError::UnknownNode {
                edge: index,
                id: id.to_string(),
            })
        };
        let source = lookup(&edge.from)?;
        let target = lookup(&edge.to)?;
        routed.push(route_edge(style, edge, source, target));
    }

    Ok(Layout {
        width: board.width(),
        height: board.height(),
        stroke_width: style.stroke_width,
        nodes: placed,
        edges: routed,
    })
}

pub fn place_node(board: &Board, style: &Style, spec: &NodeSpec) -> PlacedNode {
    let base = board.cell_center(spec.col, spec.row);
    let center = Point::new(base.x + spec.dx, base.y + spec.dy);
    let scale = spec.scale.unwrap_or(1.0) * board.scale;

    let (default_w, default_h) = match spec.shape {
        Shape::Diamond => (style.diamond, style.diamond),
        Shape::Rect => (style.rect_w, style.rect_h),
    };
    let w = spec.w.unwrap_or(default_w) * scale;
    let h = spec.h.unwrap_or(default_h) * scale;

    let text = match spec.shape {
        Shape::Rect => rect_text(spec, center),
        Shape::Diamond => diamond_text(style, spec, center),
    };

    PlacedNode {
        id: spec.id.clone(),
        shape: spec.shape,
        center,
        w,
        h,
        corner_radius: board.corner_radius,
        text,
    }
}

fn rect_text(spec: &NodeSpec, center: Point) -> Vec<TextLine> {
    let mut text = vec![TextLine {
        text: spec.title.clone(),
        at: Point::new(center.x, center.y - 4.0),
        font_size: 15.0,
        role: TextRole::Title,
    }];
    if let Some(sub) = spec.subtitle.as_ref().filter(|s| !s.is_empty()) {
        text.push(TextLine {
            text: sub.clone(),
            at: Point::new(center.x, center.y + 14.0),
            font_size: 12.0,
            role: TextRole::Subtitle,
        });
    }
    text
}

fn diamond_text(style: &Style, spec: &NodeSpec, center: Point) -> Vec<TextLine> {
    let lines = spec
        .title_lines
        .clone()
        .unwrap_or_else(|| wrap_diamond(&spec.title));
    let metrics = TitleMetrics::for_lines(lines.len());
    let block_h = metrics.line_height * lines.len().saturating_sub(1) as f64;

    let x = center.x + spec.title_dx + style.diamond_title_dx;
    let dy = spec.title_dy + style.diamond_title_dy;
    let y0 = center.y - block_h / 2.0 + dy;

    let mut text: Vec<TextLine> = lines
        .iter()
        .enumerate()
        .map(|(i, line)| TextLine {
            text: line.clone(),
            at: Point::new(x, y0 + i as f64 * metrics.line_height),
            font_size: metrics.font_size,
            role: TextRole::Title,
        })
        .collect();

    if let Some(sub) = spec.subtitle.as_ref().filter(|s| !s.is_empty()) {
        text.push(TextLine {
            text: sub.clone(),
            at: Point::new(x, center.y + TitleMetrics::subtitle_drop(lines.len()) + dy),
            font_size: 10.5,
            role: TextRole::Subtitle,
        });
    }
    text
}

pub fn same_column(a: &PlacedNode, b: &PlacedNode) -> bool {
    (a.center.x - b.center.x).abs() < SAME_COLUMN_EPSILON
}

fn bend_y(style: &Style, bend: Bend, source: &PlacedNode, target: &PlacedNode) -> f64 {
    match bend {
        Bend::Midpoint => (source.center.y + target.center.y) / 2.0,
        Bend::At(y) => y,
        Bend::Collector => target.top().y - style.collector_gap,
    }
}

pub fn route_edge(style: &Style, edge: &EdgeSpec, source: &PlacedNode, target: &PlacedNode) -> RoutedEdge {
    let end = target.top();
    let stop_y = end.y - style.arrow_clearance;
    let bend = bend_y(style, edge.bend, source, target);

    let connector = if same_column(source, target) {
        let start = source.bottom();
        let width = style.stroke_width;
        Connector::Shaft {
            x: source.center.x - width / 2.0,
            y: start.y,
            width,
            height: (stop_y - start.y).max(0.0),
        }
    } else {
        let points = match edge.routing {
            Routing::Vh => {
                let a = source.bottom();
                vec![
                    a,
                    Point::new(a.x, bend),
                    Point::new(end.x, bend),
                    Point::new(end.x, stop_y),
                ]
            }
            Routing::Hvh => {
                let a = source.right();
                let mid_x = (a.x + end.x) / 2.0;
                vec![
                    a,
                    Point::new(mid_x, a.y),
                    Point::new(mid_x, bend),
                    Point::new(end.x, bend),
                    Point::new(end.x, stop_y),
                ]
            }
        };
        Connector::Path { points }
    };

    let label = edge.label.as_ref().map(|label| PlacedLabel {
        text: label.text.clone(),
        at: Point::new(
            source.center.x + (target.center.x - source.center.x) * label.at + label.dx,
            bend + label.dy.unwrap_or(style.label_dy),
        ),
    });

    RoutedEdge {
        from: edge.from.clone(),
        to: edge.to.clone(),
        connector,
        arrow: ArrowHead {
            tip: end,
            half_width: style.arrow_tip_w,
            height: style.arrow_tip_h,
        },
        label,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn two_nodes(b: NodeSpec) -> Layout {
        let nodes = vec![NodeSpec::rect("a", 1, 0, "A"), b];
        layout(&Board::default(), &Style::default(), &nodes, &[EdgeSpec::new("a", "b")]).unwrap()
    }

    #[test]
    fn board_size_covers_grid_and_padding() {
        let board = Board::default();
        assert_eq!(board.width(), 28.0 * 2.0 + 3.0 * 250.0);
        assert_eq!(board.height(), 28.0 * 2.0 + 9.0 * 92.0);
    }

    #[test]
    fn node_size_combines_node_and_board_scale() {
        let board = Board::default();
        let style = Style::default();
        let diamond = place_node(&board, &style, &NodeSpec::diamond("d", 0, 0, "Ok?"));
        assert!((diamond.w - 74.0 * 0.85).abs() < 1e-9);
        assert_eq!(diamond.w, diamond.h);

        let rect = place_node(&board, &style, &NodeSpec::rect("r", 0, 0, "R").width(188.0).scaled(2.0));
        assert!((rect.w - 188.0 * 2.0 * 0.85).abs() < 1e-9);
        assert!((rect.h - 56.0 * 2.0 * 0.85).abs() < 1e-9);
    }

    #[test]
    fn same_column_edge_is_a_shaft_stopping_short_of_target() {
        let layout = two_nodes(NodeSpec::rect("b", 1, 1, "B"));
        let a = layout.node("a").unwrap();
        let b = layout.node("b").unwrap();
        match &layout.edges[0].connector {
            Connector::Shaft { x, y, width, height } => {
                assert!((x + width / 2.0 - a.center.x).abs() < 1e-9);
                assert_eq!(*y, a.bottom().y);
                assert!((y + height - (b.top().y - 8.0)).abs() < 1e-9);
            }
            other => panic!("expected shaft, got {other:?}"),
        }
        assert_eq!(layout.edges[0].arrow.tip, b.top());
    }

    #[test]
    fn overlapping_nodes_give_an_empty_shaft() {
        let layout = two_nodes(NodeSpec::rect("b", 1, 0, "B").offset(0.0, 10.0));
        match layout.edges[0].connector {
            Connector::Shaft { height, .. } => assert_eq!(height, 0.0),
            _ => panic!("expected shaft"),
        }
    }

    #[test]
    fn vh_route_turns_at_explicit_bend() {
        let nodes = vec![NodeSpec::diamond("q", 1, 3, "Known?"), NodeSpec::rect("l", 0, 4, "Left")];
        let edges = vec![EdgeSpec::new("q", "l").bend_at(400.0).label("YES", 0.22).label_offset(-10.0, -8.0)];
        let layout = layout(&Board::default(), &Style::default(), &nodes, &edges).unwrap();
        let q = layout.node("q").unwrap();
        let l = layout.node("l").unwrap();

        let Connector::Path { points } = &layout.edges[0].connector else {
            panic!("expected path");
        };
        assert_eq!(
            points,
            &vec![
                q.bottom(),
                Point::new(q.center.x, 400.0),
                Point::new(l.center.x, 400.0),
                Point::new(l.center.x, l.top().y - 8.0),
            ]
        );

        let label = layout.edges[0].label.as_ref().unwrap();
        assert_eq!(label.text, "YES");
        assert!((label.at.x - (q.center.x + (l.center.x - q.center.x) * 0.22 - 10.0)).abs() < 1e-9);
        assert_eq!(label.at.y, 392.0);
    }

    #[test]
    fn hvh_route_leaves_from_the_right() {
        let nodes = vec![NodeSpec::rect("a", 0, 0, "A"), NodeSpec::rect("b", 2, 2, "B")];
        let edges = vec![EdgeSpec::new("a", "b").hvh()];
        let layout = layout(&Board::default(), &Style::default(), &nodes, &edges).unwrap();
        let a = layout.node("a").unwrap();
        let b = layout.node("b").unwrap();
        let Connector::Path { points } = &layout.edges[0].connector else {
            panic!("expected path");
        };
        let mid_x = (a.right().x + b.center.x) / 2.0;
        let bend = (a.center.y + b.center.y) / 2.0;
        assert_eq!(points.len(), 5);
        assert_eq!(points[0], a.right());
        assert_eq!(points[1], Point::new(mid_x, a.center.y));
        assert_eq!(points[2], Point::new(mid_x, bend));
        assert_eq!(points[4], Point::new(b.center.x, b.top().y - 8.0));
    }

    #[test]
    fn collector_edges_share_one_bend() {
        let nodes = vec![
            NodeSpec::rect("l", 0, 7, "L"),
            NodeSpec::rect("r", 2, 7, "R"),
            NodeSpec::rect("sink", 1, 8, "Sink").offset(0.0, 30.0),
        ];
        let edges = vec![EdgeSpec::new("l", "sink").collector(), EdgeSpec::new("r", "sink").collector()];
        let layout = layout(&Board::default(), &Style::default(), &nodes, &edges).unwrap();
        let expected = layout.node("sink").unwrap().top().y - 24.0;
        for edge in &layout.edges {
            let Connector::Path { points } = &edge.connector else {
                panic!("expected path");
            };
            assert_eq!(points[1].y, expected);
            assert_eq!(points[2].y, expected);
        }
    }

    #[test]
    fn diamond_uses_explicit_lines_and_smaller_font() {
        let spec = NodeSpec::diamond("k", 1, 3, "Known in CRM?")
            .lines(&["Known", "in", "CRM?"])
            .title_offset(0.0, 3.0);
        let node = place_node(&Board::default(), &Style::default(), &spec);
        assert_eq!(node.text.len(), 3);
        assert!(node.text.iter().all(|t| t.font_size == 10.0));
        // block of 3 lines, 11px apart, centered then nudged by 3 + 3
        assert!((node.text[0].at.y - (node.center.y - 11.0 + 6.0)).abs() < 1e-9);
        assert!((node.text[2].at.y - node.text[0].at.y - 22.0).abs() < 1e-9);
    }

    #[test]
    fn rect_subtitle_sits_below_title() {
        let node = place_node(&Board::default(), &Style::default(), &NodeSpec::rect("r", 0, 0, "Title").sub("Sub"));
        assert_eq!(node.text[0].role, TextRole::Title);
        assert_eq!(node.text[1].role, TextRole::Subtitle);
        assert_eq!(node.text[1].at.y - node.text[0].at.y, 18.0);
    }

    #[test]
    fn unknown_node_is_reported() {
        let nodes = vec![NodeSpec::rect("a", 0, 0, "A")];
        let err = layout(&Board::default(), &Style::default(), &nodes, &[EdgeSpec::new("a", "ghost")]).unwrap_err();
        assert_eq!(err, DiagramError::UnknownNode { edge: 0, id: "ghost".to_string() });
    }

    #[test]
    fn duplicate_node_is_reported() {
        let nodes = vec![NodeSpec::rect("a", 0, 0, "A"), NodeSpec::rect("a", 1, 0, "A")];
        let err = layout(&Board::default(), &Style::default(), &nodes, &[]).unwrap_err();
        assert_eq!(err, DiagramError::DuplicateNode("a".to_string()));
    }

    #[test]
    fn connectors_paint_before_nodes() {
        let nodes = vec![
            NodeSpec::rect("a", 1, 0, "A"),
            NodeSpec::rect("b", 1, 1, "B"),
            NodeSpec::rect("c", 0, 2, "C"),
        ];
        let edges = vec![EdgeSpec::new("b", "c").label("NO", 0.5), EdgeSpec::new("a", "b")];
        let layout = layout(&Board::default(), &Style::default(), &nodes, &edges).unwrap();
        let order = layout.primitives();

        let first_node = order.iter().position(|p| matches!(p, Primitive::Node(..))).unwrap();
        let last_connector = order.iter().rposition(|p| matches!(p, Primitive::Connector(..))).unwrap();
        assert!(last_connector < first_node);
        assert!(matches!(order[0], Primitive::Connector(1, _)));
        assert!(matches!(order.last(), Some(Primitive::Label(_))));
    }

    proptest! {
        #[test]
        fn center_follows_grid_formula(
            col in 0u32..6,
            row in 0u32..12,
            dx in -200.0f64..200.0,
            dy in -200.0f64..200.0,
            scale in 0.25f64..3.0,
        ) {
            let board = Board::default();
            let node = place_node(&board, &Style::default(), &NodeSpec::rect("n", col, row, "N").offset(dx, dy).scaled(scale));
            let x = board.pad + col as f64 * board.col_w + board.col_w / 2.0 + dx;
            let y = board.pad + row as f64 * board.row_h + board.row_h / 2.0 + dy;
            prop_assert!((node.center.x - x).abs() < 1e-9);
            prop_assert!((node.center.y - y).abs() < 1e-9);
            prop_assert!((node.w - 210.0 * scale * board.scale).abs() < 1e-9);
        }

        #[test]
        fn shaft_iff_same_column(
            col_a in 0u32..3,
            col_b in 0u32..3,
            dx in prop_oneof![Just(0.0f64), -120.0f64..120.0],
            hvh in any::<bool>(),
        ) {
            let nodes = vec![
                NodeSpec::rect("a", col_a, 0, "A"),
                NodeSpec::rect("b", col_b, 3, "B").offset(dx, 0.0),
            ];
            let mut edge = EdgeSpec::new("a", "b");
            if hvh {
                edge = edge.hvh();
            }
            let layout = layout(&Board::default(), &Style::default(), &nodes, &[edge]).unwrap();
            let aligned = same_column(&layout.nodes[0], &layout.nodes[1]);
            match layout.edges[0].connector {
                Connector::Shaft { .. } => prop_assert!(aligned),
                Connector::Path { .. } => prop_assert!(!aligned),
            }
        }
    }
}
