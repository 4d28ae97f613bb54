//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - which blocks survive filtering
//! - which body lines survive inside a kept block
//! - block boundaries (blank, whitespace-only, adjacent headers, end of input)

use crate::filter::{filter_text, LeakBlockFilter};
use crate::model::LeakBlock;
use crate::patterns::LinePatterns;
use crate::policy::LeakKind;
use proptest::prelude::*;

const MARKER: &str = "drengrfell-project/src";

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

#[derive(Clone, Debug)]
struct GenFrame {
    project: bool,
    text: String,
}

#[derive(Clone, Debug)]
struct GenBlock {
    header: String,
    frames: Vec<GenFrame>,
}

#[derive(Clone, Copy, Debug)]
enum Separator {
    Blank,
    Whitespace,
    Adjacent,
}

fn arb_header() -> impl Strategy<Value = String> {
    (1u32..4096, 1u32..8).prop_map(|(bytes, objects)| {
        format!("Direct leak of {bytes} byte(s) in {objects} object(s) allocated from:")
    })
}

fn arb_frame(index: usize) -> impl Strategy<Value = GenFrame> {
    prop_oneof![
        ("[a-z]{1,8}", 1u32..500).prop_map(move |(func, line)| GenFrame {
            project: true,
            text: format!("    #{index} 0x{line:x} in {func}() {MARKER}/{func}.cpp:{line}"),
        }),
        ("[a-z]{1,8}", 1u32..500).prop_map(move |(func, line)| GenFrame {
            project: false,
            text: format!("    #{index} 0x{line:x} in {func} /usr/include/{func}.h:{line}"),
        }),
        Just(GenFrame {
            project: false,
            text: format!("    #{index} 0x7f00 in malloc"),
        }),
    ]
}

fn arb_block() -> impl Strategy<Value = GenBlock> {
    (arb_header(), 0usize..6).prop_flat_map(|(header, len)| {
        let frames: Vec<_> = (0..len).map(arb_frame).collect();
        frames.prop_map(move |frames| GenBlock {
            header: header.clone(),
            frames,
        })
    })
}

fn arb_separator() -> impl Strategy<Value = Separator> {
    prop_oneof![
        Just(Separator::Blank),
        Just(Separator::Whitespace),
        Just(Separator::Adjacent),
    ]
}

fn arb_report() -> impl Strategy<Value = (Vec<GenBlock>, Vec<Separator>, bool)> {
    prop::collection::vec((arb_block(), arb_separator()), 0..8).prop_flat_map(|pairs| {
        let (blocks, seps): (Vec<_>, Vec<_>) = pairs.into_iter().unzip();
        (Just(blocks), Just(seps), any::<bool>())
    })
}

fn render_report(blocks: &[GenBlock], seps: &[Separator], trailing_newline: bool) -> String {
    let mut lines: Vec<String> = vec![
        "=================================================================".to_string(),
        "==1234==ERROR: LeakSanitizer: detected memory leaks".to_string(),
        String::new(),
    ];
    for (i, (block, sep)) in blocks.iter().zip(seps).enumerate() {
        lines.push(block.header.clone());
        lines.extend(block.frames.iter().map(|f| f.text.clone()));
        let last = i + 1 == blocks.len();
        if last {
            break;
        }
        match sep {
            Separator::Blank => lines.push(String::new()),
            Separator::Whitespace => lines.push("   \t".to_string()),
            Separator::Adjacent => {}
        }
    }
    let mut text = lines.join("\n");
    if trailing_newline {
        text.push('\n');
    }
    text
}

fn expected_blocks(blocks: &[GenBlock]) -> Vec<LeakBlock> {
    blocks
        .iter()
        .filter(|b| b.frames.iter().any(|f| f.project))
        .map(|b| {
            LeakBlock::with_lines(
                b.header.clone(),
                b.frames.iter().filter(|f| f.project).map(|f| f.text.clone()),
            )
        })
        .collect()
}

fn patterns() -> LinePatterns {
    LinePatterns::new(LeakKind::Direct.header_pattern(), MARKER).expect("compile")
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn kept_blocks_are_exactly_those_with_project_frames(
        (blocks, seps, trailing) in arb_report()
    ) {
        let text = render_report(&blocks, &seps, trailing);
        let actual = filter_text(&patterns(), &text);
        prop_assert_eq!(actual, expected_blocks(&blocks));
    }

    #[test]
    fn counts_agree_with_emitted_blocks(
        (blocks, seps, trailing) in arb_report()
    ) {
        let text = render_report(&blocks, &seps, trailing);
        let p = patterns();
        let mut filter = LeakBlockFilter::new(&p);
        let mut emitted: Vec<LeakBlock> = text.lines().filter_map(|l| filter.push_line(l)).collect();
        emitted.extend(filter.finish());

        let counts = filter.counts();
        prop_assert_eq!(counts.blocks_seen as usize, blocks.len());
        prop_assert_eq!(counts.blocks_emitted as usize, emitted.len());
        prop_assert_eq!(
            counts.lines_retained as usize,
            emitted.iter().map(|b| b.lines().len()).sum::<usize>()
        );
        prop_assert!(counts.blocks_emitted <= counts.blocks_seen);
    }

    #[test]
    fn every_emitted_line_matches_marker(
        (blocks, seps, trailing) in arb_report()
    ) {
        let text = render_report(&blocks, &seps, trailing);
        for block in filter_text(&patterns(), &text) {
            prop_assert!(block.header().starts_with("Direct leak of"));
            prop_assert!(block.has_retained());
            for line in block.lines() {
                prop_assert!(line.contains(MARKER));
            }
        }
    }

    #[test]
    fn arbitrary_text_never_panics(text in "(?s).{0,512}") {
        let _ = filter_text(&patterns(), &text);
    }
}
