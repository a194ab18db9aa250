// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Circular layout plotter.
//!
//! Node `k` of `n` sits at the `k`-th `n`-th root of unity, in node
//! enumeration order. Links are straight chords; directed links get a small
//! triangular arrowhead just past their destination end.

use crate::api::Graph;
use fxhash::FxHashMap;
use nodal_common::Node;
use std::f64::consts::TAU;
use std::fmt;
use tracing::debug;

/// Arrowhead length as a fraction of the chord it sits on.
const ARROW_SCALE: f64 = 0.02;
const ARROW_HEAD_WIDTH: f64 = 0.05;
const NODE_RADIUS: f64 = 0.03;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// `e^(2πik/n)` on the unit circle.
    pub fn root_of_unity(k: usize, n: usize) -> Self {
        let angle = TAU * k as f64 / n as f64;
        Self {
            x: angle.cos(),
            y: angle.sin(),
        }
    }

    fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Chord {
    pub from: Point,
    pub to: Point,
    /// `[tip, left, right]` for directed links
    pub arrowhead: Option<[Point; 3]>,
}

impl Chord {
    fn new(from: Point, to: Point, directed: bool) -> Self {
        let arrowhead = (directed && from.distance(&to) > f64::EPSILON).then(|| {
            let (dx, dy) = (to.x - from.x, to.y - from.y);
            let tip = Point {
                x: to.x + ARROW_SCALE * dx,
                y: to.y + ARROW_SCALE * dy,
            };
            let len = dx.hypot(dy);
            let (nx, ny) = (-dy / len, dx / len);
            let half = ARROW_HEAD_WIDTH / 2.0;
            [
                tip,
                Point {
                    x: to.x + nx * half,
                    y: to.y + ny * half,
                },
                Point {
                    x: to.x - nx * half,
                    y: to.y - ny * half,
                },
            ]
        });
        Self {
            from,
            to,
            arrowhead,
        }
    }
}

/// Positions of every node and link of a graph.
#[derive(Debug, Clone)]
pub struct CircularLayout {
    pub positions: Vec<(Node, Point)>,
    pub chords: Vec<Chord>,
}

impl CircularLayout {
    pub fn new(graph: &Graph) -> Self {
        let n = graph.order();
        let positions: Vec<(Node, Point)> = graph
            .nodes()
            .iter()
            .enumerate()
            .map(|(k, node)| (node.clone(), Point::root_of_unity(k, n)))
            .collect();

        let index: FxHashMap<&Node, Point> =
            positions.iter().map(|(node, p)| (node, *p)).collect();
        let position_of = |node: &Node| index.get(node).copied();

        let chords: Vec<Chord> = graph
            .links()
            .iter()
            .filter_map(|link| {
                let (a, b) = link.endpoints();
                Some(Chord::new(position_of(a)?, position_of(b)?, link.is_directed()))
            })
            .collect();

        debug!(nodes = n, chords = chords.len(), "Computed circular layout");

        Self { positions, chords }
    }

    pub fn position(&self, node: &Node) -> Option<Point> {
        self.positions
            .iter()
            .find(|(candidate, _)| candidate == node)
            .map(|(_, p)| *p)
    }

    /// Render as a standalone SVG document `size` pixels square.
    pub fn to_svg(&self, size: u32) -> String {
        SvgDocument { layout: self, size }.to_string()
    }

    /// Stream the SVG document into `out`, stopping at the first write error.
    pub fn write_svg(&self, out: &mut impl fmt::Write, size: u32) -> fmt::Result {
        writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="-1.2 -1.2 2.4 2.4">"#
        )?;

        for chord in &self.chords {
            writeln!(
                out,
                r#"  <line x1="{:.4}" y1="{:.4}" x2="{:.4}" y2="{:.4}" stroke="blue" stroke-width="0.01"/>"#,
                chord.from.x, -chord.from.y, chord.to.x, -chord.to.y
            )?;
            if let Some([tip, left, right]) = chord.arrowhead {
                writeln!(
                    out,
                    r#"  <polygon points="{:.4},{:.4} {:.4},{:.4} {:.4},{:.4}" fill="black"/>"#,
                    tip.x, -tip.y, left.x, -left.y, right.x, -right.y
                )?;
            }
        }

        for (node, p) in &self.positions {
            writeln!(
                out,
                r#"  <circle cx="{:.4}" cy="{:.4}" r="{NODE_RADIUS}" fill="steelblue"><title>{}</title></circle>"#,
                p.x,
                -p.y,
                escape_xml(&node.to_string())
            )?;
        }

        out.write_str("</svg>\n")
    }
}

struct SvgDocument<'a> {
    layout: &'a CircularLayout,
    size: u32,
}

impl fmt::Display for SvgDocument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.layout.write_svg(f, self.size)
    }
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
