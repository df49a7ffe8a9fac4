//! Heuristic text-to-graph generator.
//!
//! Maps free-form text to a mind map description: one root node summarizing
//! the input, first-level topic nodes from paragraphs or sentences, optional
//! second-level subtopics, and a few random cross-links between non-root
//! nodes. This is a stand-in for a real language-model backend; it shares
//! the same output contract so it can be swapped out later.
//!
//! Randomness is injected through a [`rand::Rng`] so callers control the
//! source (the app uses `thread_rng`, tests use a seeded `StdRng`).

use rand::Rng;

use crate::components::mind_map::{MindMapData, MindMapLink, MindMapNode};

/// Colors cycled across non-root nodes by node-list index.
pub const NODE_PALETTE: [&str; 5] = [
	"#0EA5E9", // blue
	"#8B5CF6", // purple
	"#F97316", // orange
	"#10B981", // green
	"#EC4899", // pink
];

/// Hard cap on first-level topics; extra topics are dropped in order.
const MAX_TOPICS: usize = 12;
/// Below this many topics the input's longer words are promoted to topics.
const MIN_TOPICS: usize = 3;
/// Root label length cap before the ellipsis.
const ROOT_LABEL_MAX: usize = 30;
/// Topic label length cap before the ellipsis.
const TOPIC_LABEL_MAX: usize = 40;
/// Words this short never become subtopic material or padding topics.
const SHORT_WORD: usize = 3;

/// Generates a mind map from non-blank input text.
///
/// Callers reject blank input before invoking this; given at least one word
/// the output always has exactly one root node and every link endpoint
/// references an existing node id.
pub fn generate_mind_map<R: Rng>(text: &str, rng: &mut R) -> MindMapData {
	let mut topics = split_topics(text);

	if topics.len() > MAX_TOPICS {
		topics.truncate(MAX_TOPICS);
	} else if topics.len() < MIN_TOPICS {
		// Pad with the input's longer words, in original order, until we
		// have enough topics or run out of words.
		let mut words = text
			.split_whitespace()
			.filter(|w| w.chars().count() > SHORT_WORD);
		while topics.len() < MIN_TOPICS {
			match words.next() {
				Some(word) => topics.push(word.to_string()),
				None => break,
			}
		}
	}

	let root_id = node_id(rng);
	let root_label = truncate_label(
		&text.split_whitespace().take(5).collect::<Vec<_>>().join(" "),
		ROOT_LABEL_MAX,
	);

	let mut nodes = vec![MindMapNode {
		id: root_id.clone(),
		label: root_label,
		color: None,
		is_root: true,
	}];
	let mut links: Vec<MindMapLink> = Vec::new();

	for topic in &topics {
		if topic.chars().count() < 3 {
			continue;
		}

		let topic_id = node_id(rng);
		nodes.push(MindMapNode {
			id: topic_id.clone(),
			label: truncate_label(topic, TOPIC_LABEL_MAX),
			color: None,
			is_root: false,
		});
		links.push(MindMapLink {
			source: root_id.clone(),
			target: topic_id.clone(),
			value: None,
		});

		// Coin flip first so every topic consumes exactly one draw.
		if rng.r#gen::<f64>() > 0.5 && topic.chars().count() > 10 {
			let words: Vec<&str> = topic
				.split_whitespace()
				.filter(|w| w.chars().count() > SHORT_WORD)
				.collect();
			if words.len() > 3 {
				let subtopic_id = node_id(rng);
				nodes.push(MindMapNode {
					id: subtopic_id.clone(),
					label: words[words.len() - 3..].join(" "),
					color: None,
					is_root: false,
				});
				links.push(MindMapLink {
					source: topic_id.clone(),
					target: subtopic_id,
					value: None,
				});
			}
		}
	}

	add_cross_links(&nodes, &mut links, rng);

	for (index, node) in nodes.iter_mut().enumerate() {
		if !node.is_root {
			node.color = Some(NODE_PALETTE[index % NODE_PALETTE.len()].to_string());
		}
	}

	MindMapData { nodes, links }
}

/// Splits input into first-level topics: one per non-blank line when the
/// text has multiple paragraphs, otherwise one per sentence.
fn split_topics(text: &str) -> Vec<String> {
	let paragraphs: Vec<&str> = text
		.lines()
		.map(str::trim)
		.filter(|p| !p.is_empty())
		.collect();

	if paragraphs.len() > 1 {
		paragraphs.into_iter().map(String::from).collect()
	} else {
		text.split(['.', '!', '?'])
			.map(str::trim)
			.filter(|s| !s.is_empty())
			.map(String::from)
			.collect()
	}
}

/// Adds up to `min(3, non_root / 2)` random links between distinct non-root
/// nodes. Best-effort: an attempt that lands on an equal pair or an already
/// linked pair (in either direction) is skipped, not retried.
fn add_cross_links<R: Rng>(nodes: &[MindMapNode], links: &mut Vec<MindMapLink>, rng: &mut R) {
	let non_root: Vec<&str> = nodes
		.iter()
		.filter(|n| !n.is_root)
		.map(|n| n.id.as_str())
		.collect();
	if non_root.len() <= 3 {
		return;
	}

	let attempts = 3.min(non_root.len() / 2);
	for _ in 0..attempts {
		let source = non_root[rng.gen_range(0..non_root.len())];
		let target = non_root[rng.gen_range(0..non_root.len())];

		let already_linked = links.iter().any(|l| {
			(l.source == source && l.target == target)
				|| (l.source == target && l.target == source)
		});
		if source != target && !already_linked {
			links.push(MindMapLink {
				source: source.to_string(),
				target: target.to_string(),
				value: None,
			});
		}
	}
}

/// Opaque 9-character lowercase base-36 identifier.
fn node_id<R: Rng>(rng: &mut R) -> String {
	const CHARS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
	(0..9)
		.map(|_| CHARS[rng.gen_range(0..CHARS.len())] as char)
		.collect()
}

/// Truncates to `max` characters plus an ellipsis when over.
fn truncate_label(text: &str, max: usize) -> String {
	if text.chars().count() > max {
		let mut out: String = text.chars().take(max).collect();
		out.push_str("...");
		out
	} else {
		text.to_string()
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;

	#[test]
	fn truncate_label_appends_ellipsis_only_when_over() {
		assert_eq!(truncate_label("short", 30), "short");
		let long = "x".repeat(45);
		let out = truncate_label(&long, 40);
		assert_eq!(out.chars().count(), 43);
		assert!(out.ends_with("..."));
	}

	#[test]
	fn topics_come_from_paragraphs_when_multiple() {
		let topics = split_topics("first paragraph\n\nsecond paragraph\nthird one");
		assert_eq!(topics, ["first paragraph", "second paragraph", "third one"]);
	}

	#[test]
	fn topics_come_from_sentences_for_single_paragraph() {
		let topics = split_topics("Cats are great. Dogs are loyal! Fish are quiet?");
		assert_eq!(
			topics,
			["Cats are great", "Dogs are loyal", "Fish are quiet"]
		);
	}

	#[test]
	fn node_ids_are_nine_base36_chars() {
		let mut rng = StdRng::seed_from_u64(7);
		for _ in 0..20 {
			let id = node_id(&mut rng);
			assert_eq!(id.len(), 9);
			assert!(id.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
		}
	}

	#[test]
	fn short_input_pads_topics_from_words() {
		let mut rng = StdRng::seed_from_u64(1);
		let map = generate_mind_map("Neural networks learn representations", &mut rng);
		// One sentence, so the longer words are promoted to topics.
		let topic_links = map
			.links
			.iter()
			.filter(|l| {
				map.nodes
					.iter()
					.any(|n| n.is_root && n.id == l.source)
			})
			.count();
		assert!(topic_links >= 2, "expected padded topics, got {topic_links}");
	}

	#[test]
	fn root_color_stays_unset_and_others_cycle_palette() {
		let mut rng = StdRng::seed_from_u64(3);
		let map = generate_mind_map(
			"Topic one here. Topic two here. Topic three here. Topic four here.",
			&mut rng,
		);
		for (i, node) in map.nodes.iter().enumerate() {
			if node.is_root {
				assert!(node.color.is_none());
			} else {
				assert_eq!(
					node.color.as_deref(),
					Some(NODE_PALETTE[i % NODE_PALETTE.len()])
				);
			}
		}
	}
}
