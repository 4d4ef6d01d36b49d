use cliente_api::domain::cliente::{
    Cliente, NewCliente, Telefone, TipoCliente, TipoTelefone, UpdateCliente,
};
use cliente_api::domain::types::{ClienteEmail, ClienteId, Ddd, NumeroTelefone};
use cliente_api::dto::envelope::FailureKind;
use cliente_api::repository::errors::RepositoryError;
use cliente_api::repository::{ClienteReader, ClienteWriter, DieselRepository};
use cliente_api::services::{ClienteService, ClienteServiceImpl};

mod common;

fn payload(nome: &str, email: &str, telefones: &[(&str, &str, TipoTelefone)]) -> Cliente {
    Cliente {
        nome: nome.to_string(),
        email: email.to_string(),
        telefones: telefones
            .iter()
            .map(|(ddd, numero, tipo)| Telefone {
                ddd: ddd.to_string(),
                numero: numero.to_string(),
                tipo: *tipo,
            })
            .collect(),
        ..Cliente::default()
    }
}

#[test]
fn test_cliente_repository_crud() {
    let test_db = common::TestDb::new("test_cliente_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool());

    let alice = NewCliente::try_from(&payload(
        "Alice",
        "alice@example.com",
        &[("11", "33334444", TipoTelefone::Fixo)],
    ))
    .unwrap();
    let bob = NewCliente::try_from(&payload(
        "Bob",
        "bob@example.com",
        &[
            ("21", "987654321", TipoTelefone::Celular),
            ("21", "22223333", TipoTelefone::Comercial),
        ],
    ))
    .unwrap();

    let alice = repo.create_cliente(&alice).unwrap();
    let bob = repo.create_cliente(&bob).unwrap();
    assert!(alice.id > 0);
    assert!(alice.ativo);
    assert_eq!(bob.telefones.len(), 2);

    let all = repo.list_clientes().unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].nome, "Alice");
    assert_eq!(all[1].telefones[1].tipo, TipoTelefone::Comercial);

    let by_email = repo
        .get_cliente_by_email(&ClienteEmail::new("BOB@example.com").unwrap())
        .unwrap()
        .unwrap();
    assert_eq!(by_email.id, bob.id);

    let by_phone = repo
        .get_cliente_by_telefone(
            &Ddd::new("21").unwrap(),
            &NumeroTelefone::new("22223333").unwrap(),
        )
        .unwrap()
        .unwrap();
    assert_eq!(by_phone.id, bob.id);

    let bob_id = ClienteId::new(bob.id).unwrap();
    let mut changed = bob.clone();
    changed.nome = "Bobby".to_string();
    changed.tipo_cliente = TipoCliente::Ouro;
    changed.telefones.truncate(1);
    let updated = repo
        .update_cliente(bob_id, &UpdateCliente::try_from(&changed).unwrap())
        .unwrap();
    assert_eq!(updated.nome, "Bobby");
    assert_eq!(updated.tipo_cliente, TipoCliente::Ouro);
    assert_eq!(updated.telefones.len(), 1);
    assert!(updated.data_alteracao >= bob.data_alteracao);

    let inactive = repo.set_cliente_ativo(bob_id, false).unwrap();
    assert!(!inactive.ativo);

    let alice_id = ClienteId::new(alice.id).unwrap();
    repo.delete_cliente(alice_id).unwrap();
    assert!(repo.get_cliente_by_id(alice_id).unwrap().is_none());
    assert!(matches!(
        repo.delete_cliente(alice_id),
        Err(RepositoryError::NotFound)
    ));
    assert!(
        repo.get_cliente_by_telefone(
            &Ddd::new("11").unwrap(),
            &NumeroTelefone::new("33334444").unwrap(),
        )
        .unwrap()
        .is_none()
    );
}

#[test]
fn test_duplicate_email_is_a_unique_violation() {
    let test_db = common::TestDb::new("test_duplicate_email.db");
    let repo = DieselRepository::new(test_db.pool());

    let new_cliente = NewCliente::try_from(&payload("Ana", "ana@example.com", &[])).unwrap();
    repo.create_cliente(&new_cliente).unwrap();

    assert!(matches!(
        repo.create_cliente(&new_cliente),
        Err(RepositoryError::UniqueViolation(_))
    ));
}

#[actix_web::test]
async fn test_service_over_sqlite() {
    let test_db = common::TestDb::new("test_service_over_sqlite.db");
    let service = ClienteServiceImpl::new(DieselRepository::new(test_db.pool()));

    let created = service
        .create_cliente(payload(
            "Carla",
            "carla@example.com",
            &[("31", "99887-7665", TipoTelefone::Celular)],
        ))
        .await;
    assert!(created.success);
    let carla = created.data.unwrap();

    let duplicate = service
        .create_cliente(payload("Outra", "CARLA@example.com", &[]))
        .await;
    assert_eq!(duplicate.failure, Some(FailureKind::Conflict));

    let found = service.get_cliente_by_telefone("31", "998877665").await;
    assert_eq!(found.data.map(|c| c.id), Some(carla.id));

    let inativado = service.inativa_cliente(carla.id).await;
    assert!(inativado.success);
    assert_eq!(inativado.data.map(|c| c.ativo), Some(false));

    let again = service.inativa_cliente(carla.id).await;
    assert!(again.success);
    assert!(again.data.is_none());

    let removed = service.delete_cliente("carla@example.com").await;
    assert!(removed.success);
    assert_eq!(removed.data, Some(vec![]));

    assert!(service.get_cliente_by_id(carla.id).await.is_not_found());
}
