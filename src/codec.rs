//! JSON encoding of instances and certificates.
//!
//! Every instance and certificate type derives `serde` traits; instances are
//! decoded through validating intermediate representations, so a value that
//! comes back from [`decode`] satisfies the same invariants as one built
//! through the constructors.
//!
//! ```
//! use np_reductions::cnf::{clause, Cnf3};
//! use np_reductions::codec;
//!
//! let cnf = Cnf3::from_clauses([clause(["x", "!y", "z"])]);
//! let json = codec::encode(&cnf)?;
//! let back: Cnf3 = codec::decode(&json)?;
//! assert_eq!(back, cnf);
//! # Ok::<(), np_reductions::error::Error>(())
//! ```

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;

pub fn encode<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

pub fn decode<T: DeserializeOwned>(json: &str) -> Result<T> {
    Ok(serde_json::from_str(json)?)
}

/// Serializes a map as a sequence of `[key, value]` pairs.
///
/// JSON object keys must be strings; structured keys such as
/// [`NodeId`](crate::id::NodeId) need this representation instead.
pub(crate) mod map_as_pairs {
    use std::collections::BTreeMap;

    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<K, V, S>(map: &BTreeMap<K, V>, serializer: S) -> Result<S::Ok, S::Error>
    where
        K: Serialize,
        V: Serialize,
        S: Serializer,
    {
        serializer.collect_seq(map.iter())
    }

    pub fn deserialize<'de, K, V, D>(deserializer: D) -> Result<BTreeMap<K, V>, D::Error>
    where
        K: Deserialize<'de> + Ord,
        V: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        let pairs = Vec::<(K, V)>::deserialize(deserializer)?;
        Ok(pairs.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::certificate::{Assignment, Coloring, Path, Solution, Subset, Tour};
    use crate::cnf::{clause, Cnf3};
    use crate::graph::Edge;
    use crate::problem::{Problem, Sat3};
    use crate::tsp::TspInstance;
    use crate::types::Truth;
    use crate::error::Error;
    use crate::graph::{graph_from_edges, Graph};
    use crate::id::{NodeId, NumberId};
    use crate::ssp::SubsetSum;
    use crate::types::{Color, Var};

    #[test]
    fn test_graph_round_trip() {
        let mut g = graph_from_edges([("a", "b"), ("b", "c"), ("c", "a")]);
        g.add_node(crate::graph::Node::colored(NodeId::CoreTrue, Color::new(1)));
        let json = encode(&g).unwrap();
        let back: Graph = decode(&json).unwrap();
        assert_eq!(back, g);
        assert!(back.has_edge(&NodeId::named("c"), &NodeId::named("a")));
    }

    #[test]
    fn test_coloring_round_trip() {
        let coloring: Coloring = [
            (NodeId::VarTrue(Var::new("x")), Color::new(1)),
            (NodeId::incoming(&NodeId::named("a")), Color::new(2)),
        ]
        .into_iter()
        .collect();
        let json = encode(&coloring).unwrap();
        assert!(json.starts_with("[["));
        let back: Coloring = decode(&json).unwrap();
        assert_eq!(back, coloring);
    }

    #[test]
    fn test_solution_encoding() {
        let no: Solution<Subset> = Solution::Unsolvable;
        assert_eq!(encode(&no).unwrap(), r#"{"type":"unsolvable"}"#);

        let yes = Solution::Certificate(Subset {
            chosen: vec![NumberId::named("0")],
            used: vec![true, false],
        });
        let back: Solution<Subset> = decode(&encode(&yes).unwrap()).unwrap();
        assert_eq!(back, yes);
    }

    #[test]
    fn test_cnf_and_assignment_round_trip() {
        let cnf = Cnf3::from_clauses([clause(["x", "!y", "z"]), clause(["!x", "y", "y"])]);
        let back: Cnf3 = decode(&encode(&cnf).unwrap()).unwrap();
        assert_eq!(back, cnf);

        let assignment: Assignment = [
            (Var::new("x"), Truth::True),
            (Var::new("y"), Truth::False),
            (Var::new("z"), Truth::Either),
        ]
        .into_iter()
        .collect();
        let yes = Solution::Certificate(assignment);
        let back: Solution<Assignment> = decode(&encode(&yes).unwrap()).unwrap();
        assert_eq!(back, yes);
    }

    #[test]
    fn test_declared_but_unused_variable_survives_decoding() {
        let json = r#"{"variables":["w","x","y"],"clauses":[
            {"literals":[{"var":"x","negated":false},{"var":"y","negated":false},{"var":"y","negated":false}]},
            {"literals":[{"var":"x","negated":true},{"var":"y","negated":true},{"var":"y","negated":true}]}]}"#;
        let cnf: Cnf3 = decode(json).unwrap();
        assert_eq!(cnf.num_vars(), 3);
        let model = Sat3::solve(&cnf).into_certificate().unwrap();
        assert_eq!(model.get(&Var::new("w")), Some(Truth::Either));
    }

    #[test]
    fn test_path_round_trip() {
        let a = NodeId::named("a");
        let path = Path(vec![a.clone(), NodeId::gap(&a), NodeId::Clause(2), a]);
        let back: Path = decode(&encode(&path).unwrap()).unwrap();
        assert_eq!(back, path);
    }

    #[test]
    fn test_subset_sum_round_trip() {
        let ssp = SubsetSum::from_values(&[12, 7, 30], 19);
        let back: SubsetSum = decode(&encode(&ssp).unwrap()).unwrap();
        assert_eq!(back, ssp);
        assert_eq!(back.target_value(), ssp.target_value());
    }

    #[test]
    fn test_tsp_round_trip() {
        let mut graph = graph_from_edges([("a", "b"), ("b", "a")]);
        graph.add_edge(Edge::weighted(NodeId::named("a"), NodeId::named("a"), 5));
        let tsp = TspInstance::new(graph, 3);
        let back: TspInstance = decode(&encode(&tsp).unwrap()).unwrap();
        assert_eq!(back, tsp);
        assert_eq!(back.distances(), tsp.distances());

        let tour = Solution::Certificate(Tour {
            path: Path(vec![NodeId::named("a"), NodeId::named("b"), NodeId::named("a")]),
            cost: 2,
        });
        let back: Solution<Tour> = decode(&encode(&tour).unwrap()).unwrap();
        assert_eq!(back, tour);
    }

    #[test]
    fn test_dangling_edge_is_rejected() {
        let json = r#"{"nodes":[{"id":{"Named":"a"}}],"edges":[{"from":{"Named":"a"},"to":{"Named":"b"}}]}"#;
        let err = decode::<Graph>(json).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
        assert!(err.to_string().contains("does not exist"), "{}", err);
    }

    #[test]
    fn test_undeclared_variable_is_rejected() {
        let json = r#"{"variables":["x"],"clauses":[{"literals":[
            {"var":"x","negated":false},{"var":"y","negated":false},{"var":"x","negated":true}]}]}"#;
        let err = decode::<crate::cnf::Cnf3>(json).unwrap_err();
        assert!(err.to_string().contains("undeclared variable y"), "{}", err);
    }

    #[test]
    fn test_clause_arity_is_rejected() {
        let json = r#"{"variables":["x"],"clauses":[{"literals":[{"var":"x","negated":false}]}]}"#;
        assert!(decode::<crate::cnf::Cnf3>(json).is_err());
    }

    #[test]
    fn test_ragged_subset_sum_is_rejected() {
        let json = r#"{"numbers":[{"id":{"Named":"a"},"digits":[1]}],"target":[1,0]}"#;
        let err = decode::<SubsetSum>(json).unwrap_err();
        assert!(err.to_string().contains("has 1 digits, expected 2"), "{}", err);

        let json = r#"{"numbers":[{"id":{"Named":"a"},"digits":[1,12]}],"target":[1,0]}"#;
        assert!(decode::<SubsetSum>(json).is_err());
    }

    #[test]
    fn test_garbage_is_an_error() {
        assert!(matches!(decode::<Graph>("{not json"), Err(Error::Json(_))));
    }
}
