use {
    crate::{
        domain::{CoverSolver, Optimality, SolverUnavailable},
        infra::blocking,
    },
    good_lp::{
        Expression,
        Solution,
        SolverModel,
        Variable,
        constraint,
        default_solver,
        variable,
        variables,
    },
    mwvc_dto::{Cover, Problem},
    std::time::Duration,
};

const NAME: &str = "ilp";

/// Exact minimum weight vertex cover as a binary program.
#[derive(Debug, Clone)]
pub struct Ilp {
    timeout: Duration,
}

impl Ilp {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

#[async_trait::async_trait]
impl CoverSolver for Ilp {
    fn name(&self) -> String {
        NAME.to_owned()
    }

    fn optimality(&self) -> Optimality {
        Optimality::Proven
    }

    async fn solve(&self, problem: &Problem) -> Result<Cover, SolverUnavailable> {
        if problem.vertices.is_empty() {
            return Ok(Cover::default());
        }
        let problem = problem.clone();
        blocking::solve(NAME, self.timeout, move || solve(&problem)).await
    }
}

fn solve(problem: &Problem) -> Result<Cover, String> {
    let mut vars = variables!();
    let x: Vec<Variable> = problem
        .vertices
        .iter()
        .map(|_| vars.add(variable().binary()))
        .collect();
    let mut objective = Expression::with_capacity(x.len());
    for (&x, vertex) in x.iter().zip(&problem.vertices) {
        objective.add_mul(vertex.weight as f64, x);
    }

    // Wire ids are `1..=k` in vertex order.
    let lookup = |id: u32| {
        let index = usize::try_from(id).ok()?.checked_sub(1)?;
        x.get(index).copied()
    };
    let mut model = vars.minimise(objective).using(default_solver);
    for edge in &problem.edges {
        let (Some(u), Some(v)) = (lookup(edge.0), lookup(edge.1)) else {
            return Err(format!("edge {edge:?} references an unknown vertex"));
        };
        model = model.with(constraint!(u + v >= 1));
    }
    let solution = model.solve().map_err(|err| err.to_string())?;

    let chosen: Vec<_> = problem
        .vertices
        .iter()
        .zip(&x)
        .filter(|&(_, &x)| solution.value(x) > 0.5)
        .map(|(vertex, _)| vertex)
        .collect();
    Ok(Cover {
        weight: chosen.iter().map(|vertex| vertex.weight).sum(),
        members: chosen.iter().map(|vertex| vertex.id).collect(),
    })
}
