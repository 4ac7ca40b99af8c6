use std::io::{self, Write};

use crossterm::style::Stylize;
use pulse_client::ViewState;
use pulse_core::Article;
use pulse_format::{RenderLine, Segment};
use serde::Serialize;

/// `--json` output: the final state plus the formatted summary lines.
#[derive(Serialize)]
pub struct JsonView<'a> {
    #[serde(flatten)]
    pub state: &'a ViewState,
    pub summary_lines: Vec<RenderLine>,
}

impl<'a> JsonView<'a> {
    pub fn new(state: &'a ViewState) -> Self {
        Self {
            state,
            summary_lines: state.summary_lines(),
        }
    }
}

pub struct Renderer<W: Write> {
    out: W,
    styled: bool,
}

impl<W: Write> Renderer<W> {
    pub fn new(out: W, styled: bool) -> Self {
        Self { out, styled }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn render(&mut self, state: &ViewState) -> io::Result<()> {
        if let Some(error) = &state.error {
            self.heading("Error")?;
            writeln!(self.out, "{}", error)?;
        }

        if !state.result.summary_text.is_empty() {
            self.heading("Snapshot")?;
            for line in state.summary_lines() {
                self.line(&line)?;
            }
        }

        if !state.result.articles.is_empty() {
            writeln!(self.out)?;
            self.heading("Sources")?;
            for article in &state.result.articles {
                self.card(article)?;
            }
        }
        self.out.flush()
    }

    fn heading(&mut self, title: &str) -> io::Result<()> {
        if self.styled {
            writeln!(self.out, "{}", title.bold().underlined())
        } else {
            writeln!(self.out, "{}", title)
        }
    }

    fn line(&mut self, line: &RenderLine) -> io::Result<()> {
        write!(self.out, "  • ")?;
        for segment in &line.segments {
            self.segment(segment)?;
        }
        writeln!(self.out)
    }

    fn segment(&mut self, segment: &Segment) -> io::Result<()> {
        match (segment.emphasized, self.styled) {
            (true, true) => write!(self.out, "{}", segment.text.as_str().bold()),
            (true, false) => write!(self.out, "**{}**", segment.text),
            (false, _) => write!(self.out, "{}", segment.text),
        }
    }

    fn card(&mut self, article: &Article) -> io::Result<()> {
        writeln!(self.out)?;
        match article.icon_url() {
            Some(icon) => writeln!(self.out, "  {} ({})", article.source_label(), icon)?,
            None => writeln!(self.out, "  {}", article.source_label())?,
        }
        if self.styled {
            writeln!(self.out, "  {}", article.title.as_str().bold())?;
        } else {
            writeln!(self.out, "  {}", article.title)?;
        }
        writeln!(self.out, "  {}", article.date_label())?;
        writeln!(self.out, "  Read story: {}", article.link)?;
        if let Some(thumbnail) = article.thumbnail_url() {
            writeln!(self.out, "  Image: {}", thumbnail)?;
        }
        Ok(())
    }
}
