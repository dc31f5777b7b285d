use std::fmt;

/// A weighted graph in the `p edge` format understood by vertex cover
/// engines:
///
/// ```text
/// p edge <vertices> <edges>
/// v <id> <weight>
/// e <id> <id>
/// ```
///
/// Vertex ids are expected to be `1..=vertices`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Problem {
    pub vertices: Vec<Vertex>,
    pub edges: Vec<Edge>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Vertex {
    pub id: u32,
    pub weight: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge(pub u32, pub u32);

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "p edge {} {}", self.vertices.len(), self.edges.len())?;
        for vertex in &self.vertices {
            writeln!(f, "v {} {}", vertex.id, vertex.weight)?;
        }
        for Edge(u, v) in &self.edges {
            writeln!(f, "e {u} {v}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_problem_file() {
        let problem = Problem {
            vertices: vec![
                Vertex { id: 1, weight: 10 },
                Vertex { id: 2, weight: 6 },
                Vertex { id: 3, weight: 6 },
            ],
            edges: vec![Edge(1, 2), Edge(1, 3)],
        };
        assert_eq!(
            problem.to_string(),
            "p edge 3 2\nv 1 10\nv 2 6\nv 3 6\ne 1 2\ne 1 3\n"
        );
    }

    #[test]
    fn empty_problem_is_just_the_header() {
        assert_eq!(Problem::default().to_string(), "p edge 0 0\n");
    }
}
