use super::layout::{layout, Board, DiagramError, EdgeSpec, Layout, NodeSpec, Style};

/// The lead-automation flow shown next to the "Convert more leads" copy.
pub fn lead_automation() -> Result<Layout, DiagramError> {
    let board = Board::default();
    let style = Style::default();
    let (nodes, edges) = lead_automation_graph(&board);
    layout(&board, &style, &nodes, &edges)
}

fn lead_automation_graph(board: &Board) -> (Vec<NodeSpec>, Vec<EdgeSpec>) {
    let nodes = vec![
        NodeSpec::rect("start", 1, 0, "Start / Triggers").sub("Form • Cart • Webhook"),
        NodeSpec::rect("cap", 1, 1, "Capture Event").sub("Normalize fields"),
        NodeSpec::rect("enrich", 1, 2, "Enrich & De-dupe").sub("Verify • Merge"),
        NodeSpec::diamond("known", 1, 3, "Known in CRM?")
            .lines(&["Known", "in", "CRM?"])
            .title_offset(0.0, 3.0),
        NodeSpec::rect("update", 0, 4, "Update CRM Record").sub("Advance stage"),
        NodeSpec::rect("seg", 2, 4, "Segment & Score").sub("Hot • Warm • Nurture"),
        NodeSpec::rect("win", 0, 5, "Winback / Loyalty").sub("Email • SMS"),
        NodeSpec::rect("cad", 2, 5, "Cadence").sub("Email → SMS → Wait"),
        NodeSpec::diamond("hiQ", 0, 6, "High intent?")
            .offset(0.0, -10.0)
            .lines(&["High", "intent?"]),
        NodeSpec::diamond("intent", 2, 6, "Intent check?").offset(0.0, -10.0),
        NodeSpec::rect("bookL", 0, 7, "Booked / Checkout")
            .sub("Calendar / Pay")
            .width(188.0)
            .offset(-50.0, 20.0),
        NodeSpec::rect("esc", 1, 7, "Escalate")
            .sub("Call task")
            .width(188.0)
            .offset(-68.0, 20.0),
        NodeSpec::rect("bookR", 2, 7, "Booked / Checkout")
            .sub("Calendar / Pay")
            .width(186.0)
            .offset(-110.0, 20.0),
        NodeSpec::rect("recy", 2, 7, "Recycle")
            .sub("Retarget • Retry")
            .width(170.0)
            .offset(70.0, 20.0),
        NodeSpec::rect("crm", 1, 8, "CRM Update & Notify")
            .sub("Create/Update • Slack")
            .width(238.0)
            .offset(0.0, 30.0),
    ];

    // decision branches turn just inside the top of the row they land in
    let upper_bend = |row: u32| board.row_top(row) + 6.0;
    let lower_bend = |row: u32| board.row_top(row) - 10.0;

    let edges = vec![
        EdgeSpec::new("start", "cap"),
        EdgeSpec::new("cap", "enrich"),
        EdgeSpec::new("enrich", "known"),
        EdgeSpec::new("known", "update")
            .bend_at(upper_bend(4))
            .label("YES", 0.22)
            .label_offset(-10.0, -8.0),
        EdgeSpec::new("known", "seg")
            .bend_at(upper_bend(4))
            .label("NO", 0.78),
        EdgeSpec::new("update", "win"),
        EdgeSpec::new("seg", "cad"),
        EdgeSpec::new("win", "hiQ"),
        EdgeSpec::new("cad", "intent"),
        EdgeSpec::new("hiQ", "bookL")
            .bend_at(lower_bend(7))
            .label("YES", 0.14)
            .label_offset(-14.0, -8.0),
        EdgeSpec::new("hiQ", "esc")
            .bend_at(lower_bend(7))
            .label("NO", 0.86),
        EdgeSpec::new("intent", "bookR")
            .bend_at(lower_bend(7))
            .label("YES", 0.16)
            .label_offset(-14.0, -8.0),
        EdgeSpec::new("intent", "recy")
            .bend_at(lower_bend(7))
            .label("NO", 0.80),
        EdgeSpec::new("bookL", "crm").collector(),
        EdgeSpec::new("esc", "crm").collector(),
        EdgeSpec::new("bookR", "crm").collector(),
        EdgeSpec::new("recy", "crm").collector(),
    ];

    (nodes, edges)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagram::layout::Connector;

    #[test]
    fn shipped_flowchart_lays_out() {
        let layout = lead_automation().expect("flowchart references only defined nodes");
        assert_eq!(layout.nodes.len(), 15);
        assert_eq!(layout.edges.len(), 17);
    }

    #[test]
    fn spine_edges_are_shafts() {
        let layout = lead_automation().unwrap();
        let shafts: Vec<(&str, &str)> = layout
            .edges
            .iter()
            .filter(|e| matches!(e.connector, Connector::Shaft { .. }))
            .map(|e| (e.from.as_str(), e.to.as_str()))
            .collect();
        assert_eq!(
            shafts,
            vec![
                ("start", "cap"),
                ("cap", "enrich"),
                ("enrich", "known"),
                ("update", "win"),
                ("seg", "cad"),
                ("win", "hiQ"),
                ("cad", "intent"),
            ]
        );
    }

    #[test]
    fn outcomes_converge_on_crm_collector() {
        let layout = lead_automation().unwrap();
        let collector = layout.node("crm").unwrap().top().y - 24.0;
        let into_crm: Vec<_> = layout.edges.iter().filter(|e| e.to == "crm").collect();
        assert_eq!(into_crm.len(), 4);
        for edge in into_crm {
            let Connector::Path { points } = &edge.connector else {
                panic!("{} -> crm should be routed", edge.from);
            };
            assert_eq!(points[1].y, collector);
        }
    }
}
