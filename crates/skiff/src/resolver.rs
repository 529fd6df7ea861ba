//! Relationship Resolver.
//!
//! Each foreign-key edge touching a repository's table is planned once, at
//! construction, into the commands that fetch the far side of the edge. A
//! self-referencing edge yields two plans: one per direction.

use crate::{
    catalog,
    mapper::read_column,
    relation::{Attach, Navigation},
    schema::{RelationData, TableMapping},
    stmt::{Row, Value},
    Error, Model, Result,
};

use indexmap::IndexMap;
use skiff_core::Connection;
use skiff_sql::{Command, Serializer, Statement};
use tracing::{debug, warn};

#[derive(Debug)]
pub(crate) struct Plan {
    edge: RelationData,
    side: Side,
    target: Option<Target>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    /// The repository's table is the parent; related rows are children.
    Parent,

    /// The repository's table is the child; the related row is its parent.
    Child,
}

#[derive(Debug)]
struct Target {
    /// Index into the model's navigations.
    navigation: usize,

    /// Fetches the related rows of one entity.
    single: Command,

    /// Fetches the related rows of any number of entities.
    batch: Command,
}

/// Plans every edge in `relations` against the navigations of `M`.
///
/// An edge no navigation accepts is kept without a target. Loading
/// relationships through such a plan fails, before any query runs.
pub(crate) async fn plan<M: Model>(
    conn: &mut dyn Connection,
    serializer: &Serializer,
    mapping: &TableMapping,
    relations: &[RelationData],
    navigations: &[Navigation<M>],
) -> Result<Vec<Plan>> {
    let mut plans = vec![];

    for edge in relations {
        let sides = [
            (edge.is_parent(&mapping.table), Side::Parent),
            (edge.is_child(&mapping.table), Side::Child),
        ];

        for side in sides.into_iter().filter_map(|(applies, side)| applies.then_some(side)) {
            let navigation = navigations.iter().position(|navigation| {
                navigation.is_many() == (side == Side::Parent)
                    && navigation.matches(edge, &mapping.table)
            });

            let target = match navigation {
                Some(index) => {
                    let target_mapping =
                        catalog::resolve_mapping(conn, navigations[index].target()).await?;

                    let (single, batch) = match side {
                        Side::Parent => (
                            Statement::select_by(&target_mapping, &edge.foreign_key_column),
                            Statement::select_not_null(&target_mapping, &edge.foreign_key_column),
                        ),
                        Side::Child => (
                            Statement::select_by(&target_mapping, &edge.parent_key_column),
                            Statement::select_all(&target_mapping),
                        ),
                    };

                    debug!(
                        edge = %edge,
                        field = navigations[index].field(),
                        "planned relationship"
                    );

                    Some(Target {
                        navigation: index,
                        single: Command::compile(serializer, &single),
                        batch: Command::compile(serializer, &batch),
                    })
                }
                None => None,
            };

            plans.push(Plan {
                edge: edge.clone(),
                side,
                target,
            });
        }
    }

    Ok(plans)
}

/// Loads every relationship of a single entity.
pub(crate) async fn load_one<M: Model>(
    conn: &mut dyn Connection,
    plans: &[Plan],
    navigations: &[Navigation<M>],
    entity: &mut M,
) -> Result<()> {
    for (plan, target) in targets::<M>(plans)? {
        let navigation = &navigations[target.navigation];

        match (plan.side, navigation.attach()) {
            (Side::Parent, Attach::Many(attach)) => {
                let key = read_column(entity, &plan.edge.parent_key_column)?;

                let rows = if key.is_null() {
                    vec![]
                } else {
                    let op = target.single.bind(|_| Ok(key.clone()))?;
                    catalog::query(conn, op).await?
                };

                attach(&mut *entity, &rows)?;
            }
            (Side::Child, Attach::One(attach)) => {
                let foreign_key = read_column(entity, &plan.edge.foreign_key_column)?;

                if foreign_key.is_null() {
                    attach(&mut *entity, None)?;
                    continue;
                }

                let op = target.single.bind(|_| Ok(foreign_key.clone()))?;
                let rows = catalog::query(conn, op).await?;

                if rows.is_empty() {
                    warn!(edge = %plan.edge, foreign_key = ?foreign_key, "orphaned reference");
                }

                attach(&mut *entity, rows.first())?;
            }
            _ => return Err(mismatch(plan)),
        }
    }

    Ok(())
}

/// Loads every relationship of a batch of entities. Each edge runs one query
/// regardless of the batch size.
pub(crate) async fn load_many<M: Model>(
    conn: &mut dyn Connection,
    plans: &[Plan],
    navigations: &[Navigation<M>],
    entities: &mut [M],
) -> Result<()> {
    for (plan, target) in targets::<M>(plans)? {
        let navigation = &navigations[target.navigation];
        let rows = catalog::query(conn, target.batch.query()).await?;

        match (plan.side, navigation.attach()) {
            (Side::Parent, Attach::Many(attach)) => {
                let children = group_by(rows, &plan.edge.foreign_key_column);

                for entity in entities.iter_mut() {
                    let key = read_column(entity, &plan.edge.parent_key_column)?;
                    let related = children.get(&key).map(Vec::as_slice).unwrap_or_default();
                    attach(entity, related)?;
                }
            }
            (Side::Child, Attach::One(attach)) => {
                let parents = index_by(rows, &plan.edge.parent_key_column);

                for entity in entities.iter_mut() {
                    let foreign_key = read_column(entity, &plan.edge.foreign_key_column)?;

                    let parent = if foreign_key.is_null() {
                        None
                    } else {
                        let parent = parents.get(&foreign_key);
                        if parent.is_none() {
                            warn!(edge = %plan.edge, foreign_key = ?foreign_key, "orphaned reference");
                        }
                        parent
                    };

                    attach(entity, parent)?;
                }
            }
            _ => return Err(mismatch(plan)),
        }
    }

    Ok(())
}

/// Pairs every plan with its target, failing if any edge has no navigation.
fn targets<M: Model>(plans: &[Plan]) -> Result<Vec<(&Plan, &Target)>> {
    plans
        .iter()
        .map(|plan| match &plan.target {
            Some(target) => Ok((plan, target)),
            None => Err(Error::invalid_schema(format!(
                "model `{}` declares no {} navigation for relation {}",
                M::schema().name,
                match plan.side {
                    Side::Parent => "has-many",
                    Side::Child => "belongs-to",
                },
                plan.edge
            ))),
        })
        .collect()
}

fn mismatch(plan: &Plan) -> Error {
    Error::invalid_schema(format!(
        "navigation kind does not match relation {}",
        plan.edge
    ))
}

/// Groups rows by the value of `column`, keeping the store's row order.
fn group_by(rows: Vec<Row>, column: &str) -> IndexMap<Value, Vec<Row>> {
    let mut groups = IndexMap::<Value, Vec<Row>>::new();

    for row in rows {
        let key = row.get(column).cloned().unwrap_or_default();
        groups.entry(key).or_default().push(row);
    }

    groups
}

/// Indexes rows by the value of `column`. The first row wins on duplicates.
fn index_by(rows: Vec<Row>, column: &str) -> IndexMap<Value, Row> {
    let mut index = IndexMap::<Value, Row>::new();

    for row in rows {
        let key = row.get(column).cloned().unwrap_or_default();
        index.entry(key).or_insert(row);
    }

    index
}
