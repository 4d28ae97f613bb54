use crate::model::LeakBlock;
use crate::patterns::LinePatterns;

/// Per-file counters maintained by [`LeakBlockFilter`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BlockCounts {
    pub blocks_seen: u32,
    pub blocks_emitted: u32,
    pub lines_retained: u32,
}

#[derive(Debug)]
enum State {
    OutsideBlock,
    InBlock(LeakBlock),
}

/// Single forward pass over one report's lines.
///
/// Feed every line through [`push_line`](Self::push_line), then call
/// [`finish`](Self::finish) once at end of input. Completed blocks are handed
/// back as soon as their boundary is seen, so callers can write them out
/// immediately.
#[derive(Debug)]
pub struct LeakBlockFilter<'p> {
    patterns: &'p LinePatterns,
    state: State,
    counts: BlockCounts,
}

impl<'p> LeakBlockFilter<'p> {
    pub fn new(patterns: &'p LinePatterns) -> Self {
        Self {
            patterns,
            state: State::OutsideBlock,
            counts: BlockCounts::default(),
        }
    }

    pub fn push_line(&mut self, line: &str) -> Option<LeakBlock> {
        let line = line.trim_end();

        // A header closes whatever block is open and starts a fresh one.
        if self.patterns.is_header(line) {
            self.counts.blocks_seen = self.counts.blocks_seen.saturating_add(1);
            let previous = std::mem::replace(&mut self.state, State::InBlock(LeakBlock::new(line)));
            return self.close(previous);
        }

        if line.is_empty() {
            let previous = std::mem::replace(&mut self.state, State::OutsideBlock);
            return self.close(previous);
        }

        if let State::InBlock(block) = &mut self.state
            && self.patterns.is_project_line(line)
        {
            block.push_line(line);
        }
        None
    }

    /// End of input: flush an unterminated block.
    pub fn finish(&mut self) -> Option<LeakBlock> {
        let previous = std::mem::replace(&mut self.state, State::OutsideBlock);
        self.close(previous)
    }

    pub fn is_in_block(&self) -> bool {
        matches!(self.state, State::InBlock(_))
    }

    pub fn counts(&self) -> BlockCounts {
        self.counts
    }

    fn close(&mut self, state: State) -> Option<LeakBlock> {
        match state {
            State::InBlock(block) if block.has_retained() => {
                let retained = u32::try_from(block.lines().len()).unwrap_or(u32::MAX);
                self.counts.blocks_emitted = self.counts.blocks_emitted.saturating_add(1);
                self.counts.lines_retained = self.counts.lines_retained.saturating_add(retained);
                Some(block)
            }
            _ => None,
        }
    }
}

/// Filter a whole report held in memory.
pub fn filter_text(patterns: &LinePatterns, text: &str) -> Vec<LeakBlock> {
    let mut filter = LeakBlockFilter::new(patterns);
    let mut out: Vec<LeakBlock> = text.lines().filter_map(|l| filter.push_line(l)).collect();
    out.extend(filter.finish());
    out
}
