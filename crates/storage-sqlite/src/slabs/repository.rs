use diesel::prelude::*;

use crate::db::{execute_write, get_connection, DbPool};
use crate::errors::IntoCore;
use crate::schema::{slab_tables, slabs};
use fleetbooks_core::errors::{Error, Result};
use fleetbooks_core::slabs::{Slab, SlabConfigSourceTrait, SlabTable};

use super::model::{SlabRowDB, SlabTableDB};

pub struct SlabConfigRepository {
    pool: DbPool,
}

impl SlabConfigRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Replace a table's header and tiers in one transaction. Used by the
    /// deployment seeding path and by tests; the table arrives already
    /// validated, so the stored rows always round-trip through
    /// [`SlabTable::new`].
    pub async fn save_table(&self, table: &SlabTable) -> Result<()> {
        let header = SlabTableDB {
            name: table.name().to_string(),
            convention: table.convention().to_string(),
        };
        let rows: Vec<SlabRowDB> = table
            .slabs()
            .iter()
            .map(|s| SlabRowDB::new(table.name(), s))
            .collect();

        execute_write(self.pool.clone(), move |conn| {
            diesel::delete(slabs::table.filter(slabs::table_name.eq(&header.name)))
                .execute(conn)
                .into_core()?;
            diesel::replace_into(slab_tables::table)
                .values(&header)
                .execute(conn)
                .into_core()?;
            diesel::insert_into(slabs::table)
                .values(&rows)
                .execute(conn)
                .into_core()?;
            Ok(())
        })
        .await
    }
}

impl SlabConfigSourceTrait for SlabConfigRepository {
    fn load(&self, for_table: &str) -> Result<SlabTable> {
        let mut conn = get_connection(&self.pool)?;

        let header = slab_tables::table
            .filter(slab_tables::name.eq(for_table))
            .first::<SlabTableDB>(&mut conn)
            .into_core()?;

        let convention = header.parse_convention().ok_or_else(|| {
            Error::Repository(format!(
                "slab table '{}' has unknown convention '{}'",
                header.name, header.convention
            ))
        })?;

        let tiers: Vec<Slab> = slabs::table
            .filter(slabs::table_name.eq(for_table))
            .order(slabs::min_trips.asc())
            .load::<SlabRowDB>(&mut conn)
            .into_core()?
            .into_iter()
            .map(Slab::from)
            .collect();

        Ok(SlabTable::new(header.name, convention, tiers)?)
    }
}
