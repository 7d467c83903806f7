use super::Page;
use super::Throws;
use crate::client::Surface;
use crate::protocol::Row;
use crate::view::*;
use crate::*;
use web_sys::Element;

/// [`Surface`] over the table page's fixed element ids.
///
/// Regions are cleared and rebuilt on every paint. Text always goes through
/// `textContent`.
pub struct DomSurface {
    page: Page,
}

impl DomSurface {
    pub fn new(page: Page) -> Self {
        Self { page }
    }

    fn clear(&self, id: &str) -> anyhow::Result<Element> {
        let element = self.page.element(id)?;
        element.set_text_content(None);
        Ok(element)
    }

    fn card(&self, view: &CardView) -> anyhow::Result<Element> {
        let element = self.page.create("div", view.class_name(), Some(&view.label()))?;
        element
            .set_attribute("data-suit", view.suit())
            .throws("card suit")?;
        element
            .set_attribute("data-card", &encode_drag(view.card())?)
            .throws("card payload")?;
        if view.draggable() {
            element
                .set_attribute("draggable", "true")
                .throws("card draggable")?;
        }
        if view.removable() {
            element
                .set_attribute("data-removable", "true")
                .throws("card removable")?;
            element
                .set_attribute("title", "Double-click to take back")
                .throws("card title")?;
        }
        Ok(element)
    }

    fn hand(&self, cards: &[CardView]) -> anyhow::Result<()> {
        let hand = self.clear(HAND_ID)?;
        for view in cards {
            hand.append_child(&self.card(view)?).throws("append card")?;
        }
        Ok(())
    }

    fn board(&self, board: &BoardView, element: fn(&Row) -> String) -> anyhow::Result<()> {
        for row in board.rows.iter() {
            let container = self.clear(&element(&row.row))?;
            for slot in row.slots.iter() {
                let cell = self.page.create("div", "card-slot", None)?;
                if slot.droppable {
                    cell.set_attribute("data-position", row.row.label())
                        .throws("slot position")?;
                    cell.set_attribute("data-index", &slot.index.to_string())
                        .throws("slot index")?;
                }
                if let Some(view) = slot.card.as_ref() {
                    cell.append_child(&self.card(view)?).throws("append card")?;
                }
                container.append_child(&cell).throws("append slot")?;
            }
        }
        Ok(())
    }

    fn scores(&self, lines: &[ScoreLine]) -> anyhow::Result<()> {
        let board = self.clear(SCOREBOARD_ID)?;
        for line in lines {
            let entry = self.page.create("div", line.class_name(), None)?;
            let name = self.page.create("span", "player-name", Some(&line.name))?;
            let score = self
                .page
                .create("span", "score", Some(&line.score.to_string()))?;
            entry.append_child(&name).throws("append name")?;
            entry.append_child(&score).throws("append score")?;
            board.append_child(&entry).throws("append score line")?;
        }
        Ok(())
    }

    fn status(&self, status: &StatusLine) -> anyhow::Result<()> {
        self.page
            .element(STATUS_ID)?
            .set_text_content(Some(&status.text));
        self.display(READY_ID, status.ready)
    }

    fn timer(&self, timer: Option<&str>) -> anyhow::Result<()> {
        if let Some(text) = timer {
            self.page.element(TIMER_ID)?.set_text_content(Some(text));
        }
        self.display(TIMER_ID, timer.is_some())
    }

    fn display(&self, id: &str, shown: bool) -> anyhow::Result<()> {
        self.page
            .styled(id)?
            .style()
            .set_property("display", if shown { "block" } else { "none" })
            .throws("set display")
    }
}

impl Surface for DomSurface {
    fn paint(&mut self, frame: &Frame) -> anyhow::Result<()> {
        if let Some(cards) = frame.hand.as_ref() {
            self.hand(cards)?;
        }
        if let Some(board) = frame.board.as_ref() {
            self.board(board, Row::element)?;
        }
        if let Some(board) = frame.opponent.as_ref() {
            self.board(board, Row::opponent_element)?;
        }
        self.scores(&frame.scores)?;
        self.status(&frame.status)?;
        self.timer(frame.timer.as_deref())
    }

    fn chat(&mut self, line: &ChatLine) -> anyhow::Result<()> {
        let transcript = self.page.element(CHAT_BOX_ID)?;
        let bubble = self.page.create("div", "chat-message", None)?;
        let author = self.page.create("strong", "chat-author", Some(&line.author))?;
        let text = self.page.create("span", "chat-text", Some(&line.text))?;
        bubble.append_child(&author).throws("append author")?;
        bubble.append_child(&text).throws("append text")?;
        transcript.append_child(&bubble).throws("append chat")?;
        transcript.set_scroll_top(transcript.scroll_height());
        Ok(())
    }

    fn alert(&mut self, message: &str) {
        let _ = self
            .page
            .window()
            .alert_with_message(message)
            .throws("alert")
            .inspect_err(|e| log::warn!("{:#}", e));
    }

    fn toast(&mut self, message: &str) {
        let _ = self
            .page
            .body()
            .and_then(|body| {
                let toast = self.page.create("div", "error-message", Some(message))?;
                body.append_child(&toast).throws("append toast")?;
                self.page.after(TOAST_DURATION, move || toast.remove())
            })
            .inspect_err(|e| log::warn!("toast failed: {:#}", e));
    }

    fn connected(&mut self) {
        let _ = self
            .body_class("connected")
            .inspect_err(|e| log::warn!("{:#}", e));
    }
}

impl DomSurface {
    fn body_class(&self, class: &str) -> anyhow::Result<()> {
        self.page
            .body()?
            .class_list()
            .add_1(class)
            .throws("mark body")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::Snapshot;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn page() -> Page {
        let page = Page::current().unwrap();
        let body = page.body().unwrap();
        body.set_text_content(None);
        for id in [HAND_ID, SCOREBOARD_ID, STATUS_ID, READY_ID, TIMER_ID, CHAT_BOX_ID]
            .into_iter()
            .chain(["top-row", "middle-row", "bottom-row"])
            .chain(["opponent-top-row", "opponent-middle-row", "opponent-bottom-row"])
        {
            let element = page.create("div", "", None).unwrap();
            element.set_id(id);
            body.append_child(&element).unwrap();
        }
        page
    }

    fn frame(status: &str) -> Frame {
        let snapshot: Snapshot = serde_json::from_value(serde_json::json!({
            "state": status,
            "current_street": 1,
            "current_player": "me",
            "players": { "me": {
                "name": "<b>Me</b>",
                "time_bank": 25,
                "hand": { "top": [{ "rank": "Q", "suit": "♥" }], "current": [{ "rank": "2", "suit": "♠" }] }
            } },
        }))
        .unwrap();
        Frame::from((&snapshot, "me"))
    }

    fn shown(page: &Page, id: &str) -> String {
        page.styled(id).unwrap().style().get_property_value("display").unwrap()
    }

    #[wasm_bindgen_test]
    fn paints_every_region() {
        let page = page();
        let mut surface = DomSurface::new(page.clone());
        surface.paint(&frame("playing")).unwrap();
        assert!(page.element(HAND_ID).unwrap().child_element_count() == 1);
        assert!(page.element("top-row").unwrap().child_element_count() == 3);
        assert!(page.element("middle-row").unwrap().child_element_count() == 5);
        assert!(page.element(STATUS_ID).unwrap().text_content().as_deref() == Some("Street 1"));
        assert!(page.element(TIMER_ID).unwrap().text_content().as_deref() == Some("Time: 25s"));
        assert!(shown(&page, TIMER_ID) == "block");
        assert!(shown(&page, READY_ID) == "none");
    }

    #[wasm_bindgen_test]
    fn only_own_slots_are_drop_targets() {
        let page = page();
        let mut surface = DomSurface::new(page.clone());
        let snapshot: Snapshot = serde_json::from_value(serde_json::json!({
            "state": "playing",
            "current_player": "me",
            "opponent_table": {},
            "players": { "me": { "name": "Me" }, "you": { "name": "You" } },
        }))
        .unwrap();
        surface.paint(&Frame::from((&snapshot, "me"))).unwrap();
        let own = page.element("middle-row").unwrap();
        let theirs = page.element("opponent-middle-row").unwrap();
        let targets = |row: &Element| row.query_selector_all(".card-slot[data-position]").unwrap().length();
        assert!(targets(&own) == 5);
        assert!(theirs.child_element_count() == 5);
        assert!(targets(&theirs) == 0);
    }

    #[wasm_bindgen_test]
    fn scores_use_the_score_class() {
        let page = page();
        let mut surface = DomSurface::new(page.clone());
        surface.paint(&frame("playing")).unwrap();
        let board = page.element(SCOREBOARD_ID).unwrap();
        let score = board.query_selector(".score").unwrap().unwrap();
        assert!(score.text_content().as_deref() == Some("0"));
    }

    #[wasm_bindgen_test]
    fn names_are_text_not_markup() {
        let page = page();
        let mut surface = DomSurface::new(page.clone());
        surface.paint(&frame("waiting")).unwrap();
        let board = page.element(SCOREBOARD_ID).unwrap();
        assert!(board.query_selector("b").unwrap().is_none());
        assert!(board.text_content().unwrap().contains("<b>Me</b>"));
        assert!(shown(&page, READY_ID) == "block");
    }

    #[wasm_bindgen_test]
    fn chat_appends() {
        let page = page();
        let mut surface = DomSurface::new(page.clone());
        let line = ChatLine {
            author: "Ann:".into(),
            text: "gl".into(),
        };
        surface.chat(&line).unwrap();
        surface.chat(&line).unwrap();
        let transcript = page.element(CHAT_BOX_ID).unwrap();
        assert!(transcript.child_element_count() == 2);
    }

    #[wasm_bindgen_test]
    fn missing_elements_are_errors() {
        let page = page();
        page.element(STATUS_ID).unwrap().remove();
        let mut surface = DomSurface::new(page.clone());
        assert!(surface.paint(&frame("playing")).is_err());
    }

    #[wasm_bindgen_test]
    fn config_comes_from_body() {
        let page = page();
        let body = page.body().unwrap();
        body.set_attribute("data-player-id", "p7").unwrap();
        body.set_attribute("data-log-level", "warn").unwrap();
        let config = page.config().unwrap();
        assert!(config.player_id == "p7");
        assert!(config.level == log::LevelFilter::Warn);
        body.remove_attribute("data-player-id").unwrap();
        assert!(page.config().is_err());
    }
}
