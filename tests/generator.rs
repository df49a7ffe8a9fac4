//! Property checks for the text-to-graph generator, run over seeded RNGs so
//! the random choices (subtopics, cross-links) are covered deterministically.

use std::collections::HashSet;

use mindmesh::generator::generate_mind_map;
use mindmesh::{MindMapData, MindMapNode};
use rand::SeedableRng;
use rand::rngs::StdRng;

const ESSAY: &str = "Rust is a systems programming language focused on safety. \
	It achieves memory safety without garbage collection. \
	The ownership model is checked at compile time. \
	Concurrency bugs become type errors instead of crashes. \
	The ecosystem ships a capable package manager. \
	Many companies now run Rust services in production.";

fn root(map: &MindMapData) -> &MindMapNode {
	map.nodes.iter().find(|n| n.is_root).unwrap()
}

#[test]
fn exactly_one_root_and_all_links_resolve() {
	for seed in 0..50 {
		let mut rng = StdRng::seed_from_u64(seed);
		let map = generate_mind_map(ESSAY, &mut rng);

		assert_eq!(map.nodes.iter().filter(|n| n.is_root).count(), 1);

		let ids: HashSet<&str> = map.nodes.iter().map(|n| n.id.as_str()).collect();
		assert_eq!(ids.len(), map.nodes.len(), "node ids must be unique");
		for link in &map.links {
			assert!(ids.contains(link.source.as_str()));
			assert!(ids.contains(link.target.as_str()));
		}
	}
}

#[test]
fn topic_count_stays_between_2_and_12() {
	let inputs = [
		ESSAY,
		"Hi there",
		"One. Two! Three? Four. Five. Six. Seven. Eight. Nine. Ten. \
		 Eleven. Twelve. Thirteen. Fourteen. Fifteen. Sixteen.",
		"para one has words\npara two has words\npara three\npara four\npara five",
	];
	for (i, input) in inputs.iter().enumerate() {
		let mut rng = StdRng::seed_from_u64(i as u64);
		let map = generate_mind_map(input, &mut rng);
		let root_id = &root(&map).id;
		// First-level topics are exactly the nodes linked from the root.
		let topics = map.links.iter().filter(|l| &l.source == root_id).count();
		assert!(
			(2..=12).contains(&topics),
			"input {i}: {topics} topics out of range"
		);
	}
}

#[test]
fn labels_respect_length_caps() {
	let long_sentences = (0..5)
		.map(|i| format!("{} sentence number {i} with plenty of additional words to overflow the cap", "extremely verbose opening".repeat(3)))
		.collect::<Vec<_>>()
		.join(". ");

	for seed in 0..20 {
		let mut rng = StdRng::seed_from_u64(seed);
		let map = generate_mind_map(&long_sentences, &mut rng);
		for node in &map.nodes {
			let cap = if node.is_root { 33 } else { 43 };
			assert!(
				node.label.chars().count() <= cap,
				"label too long: {:?}",
				node.label
			);
		}
	}
}

#[test]
fn no_link_is_duplicated_in_either_direction() {
	for seed in 0..100 {
		let mut rng = StdRng::seed_from_u64(seed);
		let map = generate_mind_map(ESSAY, &mut rng);

		let mut seen = HashSet::new();
		for link in &map.links {
			assert_ne!(link.source, link.target, "self-link generated");
			let forward = (link.source.clone(), link.target.clone());
			let backward = (link.target.clone(), link.source.clone());
			assert!(
				!seen.contains(&forward) && !seen.contains(&backward),
				"duplicate link {forward:?} (seed {seed})"
			);
			seen.insert(forward);
		}
	}
}

#[test]
fn cross_links_never_touch_the_root() {
	for seed in 0..100 {
		let mut rng = StdRng::seed_from_u64(seed);
		let map = generate_mind_map(ESSAY, &mut rng);
		let root_id = &root(&map).id;

		// Hierarchy links go root -> topic or topic -> subtopic; no link
		// may point back at the root.
		for link in &map.links {
			assert_ne!(&link.target, root_id, "link into the root (seed {seed})");
		}
	}
}

#[test]
fn three_sentences_become_three_topics_under_the_root() {
	let mut rng = StdRng::seed_from_u64(42);
	let map = generate_mind_map("Cats are great. Dogs are loyal. Fish are quiet.", &mut rng);

	let root = root(&map);
	assert_eq!(root.label, "Cats are great. Dogs are");

	let topic_labels: Vec<&str> = map
		.nodes
		.iter()
		.filter(|n| !n.is_root)
		.map(|n| n.label.as_str())
		.collect();
	// No topic has more than three words longer than three characters, so
	// no subtopics can appear regardless of the coin flips.
	assert_eq!(
		topic_labels,
		["Cats are great", "Dogs are loyal", "Fish are quiet"]
	);
	assert_eq!(map.links.len(), 3);
	for link in &map.links {
		assert_eq!(link.source, root.id);
	}
}

#[test]
fn paragraphs_take_precedence_over_sentences() {
	let mut rng = StdRng::seed_from_u64(0);
	let map = generate_mind_map(
		"Alpha paragraph. With two sentences.\nBeta paragraph here.\nGamma closes it.",
		&mut rng,
	);
	let labels: Vec<&str> = map
		.nodes
		.iter()
		.filter(|n| !n.is_root)
		.map(|n| n.label.as_str())
		.collect();
	assert!(labels.contains(&"Alpha paragraph. With two sentences."));
	assert!(labels.contains(&"Beta paragraph here."));
	assert!(labels.contains(&"Gamma closes it."));
}
