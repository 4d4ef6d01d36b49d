//! Diesel implementation of the cliente repository traits.

use chrono::Utc;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::domain::cliente::{Cliente, NewCliente, NewTelefone, UpdateCliente};
use crate::domain::types::{ClienteEmail, ClienteId, Ddd, NumeroTelefone};
use crate::models::cliente::{
    Cliente as DbCliente, NewCliente as DbNewCliente, NewTelefone as DbNewTelefone,
    Telefone as DbTelefone, UpdateCliente as DbUpdateCliente, into_domain,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{ClienteReader, ClienteWriter, DieselRepository};

fn load_telefones(conn: &mut SqliteConnection, row: &DbCliente) -> RepositoryResult<Vec<DbTelefone>> {
    use crate::schema::telefones;

    let telefones = DbTelefone::belonging_to(row)
        .select(DbTelefone::as_select())
        .order(telefones::id.asc())
        .load(conn)?;
    Ok(telefones)
}

fn hydrate(conn: &mut SqliteConnection, row: DbCliente) -> RepositoryResult<Cliente> {
    let telefones = load_telefones(conn, &row)?;
    Ok(into_domain(row, telefones)?)
}

fn find_cliente(conn: &mut SqliteConnection, id: i32) -> RepositoryResult<Option<Cliente>> {
    use crate::schema::clientes;

    let row = clientes::table
        .find(id)
        .select(DbCliente::as_select())
        .first(conn)
        .optional()?;

    row.map(|row| hydrate(conn, row)).transpose()
}

fn insert_telefones(
    conn: &mut SqliteConnection,
    cliente_id: i32,
    telefones: &[NewTelefone],
) -> RepositoryResult<()> {
    use crate::schema::telefones;

    if telefones.is_empty() {
        return Ok(());
    }

    let rows = telefones
        .iter()
        .map(|telefone| DbNewTelefone::from_domain(cliente_id, telefone))
        .collect::<Vec<_>>();
    diesel::insert_into(telefones::table)
        .values(&rows)
        .execute(conn)?;
    Ok(())
}

impl ClienteReader for DieselRepository {
    fn list_clientes(&self) -> RepositoryResult<Vec<Cliente>> {
        use crate::schema::{clientes, telefones};

        let mut conn = self.conn()?;

        let rows = clientes::table
            .order(clientes::id.asc())
            .select(DbCliente::as_select())
            .load(&mut conn)?;

        let telefones = DbTelefone::belonging_to(&rows)
            .select(DbTelefone::as_select())
            .order(telefones::id.asc())
            .load(&mut conn)?
            .grouped_by(&rows);

        rows.into_iter()
            .zip(telefones)
            .map(|(row, telefones)| into_domain(row, telefones).map_err(RepositoryError::from))
            .collect()
    }

    fn get_cliente_by_id(&self, id: ClienteId) -> RepositoryResult<Option<Cliente>> {
        let mut conn = self.conn()?;
        find_cliente(&mut conn, id.get())
    }

    fn get_cliente_by_email(&self, email: &ClienteEmail) -> RepositoryResult<Option<Cliente>> {
        use crate::schema::clientes;

        let mut conn = self.conn()?;

        let row = clientes::table
            .filter(clientes::email.eq(email.as_str()))
            .select(DbCliente::as_select())
            .first(&mut conn)
            .optional()?;

        row.map(|row| hydrate(&mut conn, row)).transpose()
    }

    fn get_cliente_by_telefone(
        &self,
        ddd: &Ddd,
        numero: &NumeroTelefone,
    ) -> RepositoryResult<Option<Cliente>> {
        use crate::schema::telefones;

        let mut conn = self.conn()?;

        let cliente_id = telefones::table
            .filter(telefones::ddd.eq(ddd.as_str()))
            .filter(telefones::numero.eq(numero.as_str()))
            .order(telefones::cliente_id.asc())
            .select(telefones::cliente_id)
            .first::<i32>(&mut conn)
            .optional()?;

        match cliente_id {
            Some(cliente_id) => find_cliente(&mut conn, cliente_id),
            None => Ok(None),
        }
    }
}

impl ClienteWriter for DieselRepository {
    fn create_cliente(&self, new_cliente: &NewCliente) -> RepositoryResult<Cliente> {
        use crate::schema::clientes;

        let mut conn = self.conn()?;

        conn.transaction::<_, RepositoryError, _>(|conn| {
            let now = Utc::now().naive_utc();
            let row = diesel::insert_into(clientes::table)
                .values(&DbNewCliente::from_domain(new_cliente, now))
                .returning(DbCliente::as_returning())
                .get_result(conn)?;

            insert_telefones(conn, row.id, &new_cliente.telefones)?;
            hydrate(conn, row)
        })
    }

    fn update_cliente(&self, id: ClienteId, updates: &UpdateCliente) -> RepositoryResult<Cliente> {
        use crate::schema::{clientes, telefones};

        let mut conn = self.conn()?;

        conn.transaction::<_, RepositoryError, _>(|conn| {
            let now = Utc::now().naive_utc();
            let row = diesel::update(clientes::table.find(id.get()))
                .set(&DbUpdateCliente::from_domain(updates, now))
                .returning(DbCliente::as_returning())
                .get_result(conn)?;

            diesel::delete(telefones::table.filter(telefones::cliente_id.eq(row.id)))
                .execute(conn)?;
            insert_telefones(conn, row.id, &updates.telefones)?;
            hydrate(conn, row)
        })
    }

    fn set_cliente_ativo(&self, id: ClienteId, ativo: bool) -> RepositoryResult<Cliente> {
        use crate::schema::clientes;

        let mut conn = self.conn()?;

        let row = diesel::update(clientes::table.find(id.get()))
            .set((
                clientes::ativo.eq(ativo),
                clientes::data_alteracao.eq(Utc::now().naive_utc()),
            ))
            .returning(DbCliente::as_returning())
            .get_result(&mut conn)?;

        hydrate(&mut conn, row)
    }

    fn delete_cliente(&self, id: ClienteId) -> RepositoryResult<()> {
        use crate::schema::{clientes, telefones};

        let mut conn = self.conn()?;

        conn.transaction::<_, RepositoryError, _>(|conn| {
            diesel::delete(telefones::table.filter(telefones::cliente_id.eq(id.get())))
                .execute(conn)?;
            let deleted = diesel::delete(clientes::table.find(id.get())).execute(conn)?;
            if deleted == 0 {
                return Err(RepositoryError::NotFound);
            }
            Ok(())
        })
    }
}
